#[cfg(test)]
mod tests {
    use taskdeck::libs::folder::{find_folder, Folder};

    fn folder(id: &str, name: &str, children: Vec<Folder>) -> Folder {
        Folder {
            id: id.to_string(),
            name: name.to_string(),
            user_id: None,
            parent_id: None,
            created_at: None,
            updated_at: None,
            children,
        }
    }

    #[test]
    fn test_find_nested_folder() {
        // The tree fetch shape: one root with one child.
        let forest = vec![folder("f1", "Sprint", vec![folder("f2", "Backlog", vec![])])];

        let found = find_folder(&forest, "f2").unwrap();
        assert_eq!(found.id, "f2");
        assert_eq!(found.name, "Backlog");
    }

    #[test]
    fn test_find_root_folder() {
        let forest = vec![folder("f1", "Sprint", vec![folder("f2", "Backlog", vec![])])];

        let found = find_folder(&forest, "f1").unwrap();
        assert_eq!(found.name, "Sprint");
    }

    #[test]
    fn test_missing_id_returns_none() {
        let forest = vec![folder("f1", "Sprint", vec![folder("f2", "Backlog", vec![])])];

        assert!(find_folder(&forest, "f3").is_none());
    }

    #[test]
    fn test_empty_forest() {
        assert!(find_folder(&[], "f1").is_none());
    }

    #[test]
    fn test_every_present_id_is_found() {
        let forest = vec![
            folder(
                "a",
                "Projects",
                vec![
                    folder("a1", "Alpha", vec![folder("a1x", "Spikes", vec![])]),
                    folder("a2", "Beta", vec![]),
                ],
            ),
            folder("b", "Personal", vec![folder("b1", "Errands", vec![])]),
        ];

        for id in ["a", "a1", "a1x", "a2", "b", "b1"] {
            let found = find_folder(&forest, id);
            assert_eq!(found.map(|f| f.id.as_str()), Some(id));
        }
    }

    #[test]
    fn test_search_crosses_sibling_subtrees() {
        // The target sits in the second root's subtree; the search has
        // to come back out of the first root after descending it.
        let forest = vec![
            folder("a", "First", vec![folder("a1", "Deep", vec![])]),
            folder("b", "Second", vec![folder("b1", "Target", vec![])]),
        ];

        let found = find_folder(&forest, "b1").unwrap();
        assert_eq!(found.name, "Target");
    }
}
