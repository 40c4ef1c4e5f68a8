/// Authoritative ordered list of to-do strings.
///
/// Entries are kept alphabetically sorted (case-insensitive) with duplicates
/// allowed, so the list view can render it as-is. The view never owns the
/// data; it only displays this model and reports indices back.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TodoList {
    items: Vec<String>,
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from persisted items, restoring the sorted order.
    pub fn from_items(mut items: Vec<String>) -> Self {
        items.sort_by_key(|s| s.to_lowercase());
        Self { items }
    }

    /// Insert a non-empty entry at its sorted position and return the index.
    /// An empty string is a no-op.
    pub fn add(&mut self, text: &str) -> Option<usize> {
        if text.is_empty() {
            return None;
        }
        let index = self.sorted_position(text);
        self.items.insert(index, text.to_string());
        Some(index)
    }

    /// Remove the entry at `index`; no-op when out of range.
    pub fn remove(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Replace the entry at `index` with a non-empty string, re-sorting it to
    /// its new position. Returns the new index. An empty replacement or an
    /// out-of-range index leaves the list unchanged.
    pub fn replace(&mut self, index: usize, text: &str) -> Option<usize> {
        if text.is_empty() || index >= self.items.len() {
            return None;
        }
        self.items.remove(index);
        self.add(text)
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }

    /// Concatenate all entries with `separator`, in display order.
    pub fn joined(&self, separator: &str) -> String {
        self.items.join(separator)
    }

    fn sorted_position(&self, text: &str) -> usize {
        let key = text.to_lowercase();
        self.items.partition_point(|s| s.to_lowercase() <= key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_non_empty_grows_by_one() {
        let mut list = TodoList::new();
        assert_eq!(list.add("Buy milk"), Some(0));
        assert_eq!(list.len(), 1);
        assert_eq!(list.get(0), Some("Buy milk"));
    }

    #[test]
    fn test_add_empty_is_no_op() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        assert_eq!(list.add(""), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_display_order_is_sorted_regardless_of_insertion() {
        let mut list = TodoList::new();
        list.add("call Alice");
        list.add("Buy milk");
        list.add("answer mail");
        assert_eq!(list.items(), ["answer mail", "Buy milk", "call Alice"]);
    }

    #[test]
    fn test_duplicates_allowed() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.add("Buy milk");
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_out_of_range_is_no_op() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        assert_eq!(list.remove(5), None);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_remove_selected_entry() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.add("Call Alice");
        assert_eq!(list.remove(0), Some("Buy milk".to_string()));
        assert_eq!(list.items(), ["Call Alice"]);
    }

    #[test]
    fn test_replace_changes_only_that_entry() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.add("Call Alice");
        let new_index = list.replace(0, "Walk the dog").unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(new_index), Some("Walk the dog"));
        assert!(list.items().contains(&"Call Alice".to_string()));
        assert!(!list.items().contains(&"Buy milk".to_string()));
    }

    #[test]
    fn test_replace_with_empty_keeps_entry() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        assert_eq!(list.replace(0, ""), None);
        assert_eq!(list.get(0), Some("Buy milk"));
    }

    #[test]
    fn test_joined_with_separator() {
        let mut list = TodoList::new();
        list.add("Buy milk");
        list.add("Call Alice");
        assert_eq!(list.joined(" | "), "Buy milk | Call Alice");
    }

    #[test]
    fn test_from_items_restores_sorted_order() {
        let list = TodoList::from_items(vec!["b".into(), "a".into(), "c".into()]);
        assert_eq!(list.items(), ["a", "b", "c"]);
    }
}
