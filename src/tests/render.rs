use super::outline;
use crate::tree::SectionTree;

#[test]
fn test_outline_draws_branches() {
    let mut tree = SectionTree::new("root", "/");
    let intro = tree.add_child(tree.root(), "Introduction", "");
    tree.add_child(intro, "Background", "");
    tree.add_child(intro, "Aims", "");
    let methods = tree.add_child(tree.root(), "Methods", "");
    tree.add_child(methods, "Data", "");

    let expected = "\
root
├── Introduction
│   ├── Background
│   └── Aims
└── Methods
    └── Data
";
    assert_eq!(outline(&tree), expected);
}

#[test]
fn test_outline_of_bare_root() {
    let tree = SectionTree::new("root", "/");
    assert_eq!(outline(&tree), "root\n");
}
