//! A directory listing at some treeish

use serde::Serialize;

use super::tree_object::TreeObject;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tree {
    treeish: String,
    path: String,
    children: Vec<TreeObject>,
}

impl Tree {
    /// Children are ordered directories first, then by name
    pub fn new(
        treeish: impl Into<String>,
        path: impl Into<String>,
        mut children: Vec<TreeObject>,
    ) -> Self {
        children.sort_by(|a, b| {
            b.is_tree()
                .cmp(&a.is_tree())
                .then_with(|| a.name().cmp(b.name()))
        });
        Self {
            treeish: treeish.into(),
            path: normalize(&path.into()),
            children,
        }
    }

    pub fn treeish(&self) -> &str {
        &self.treeish
    }

    /// Directory this listing describes, without leading or trailing `/`
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Enclosing directory; `None` at the root
    pub fn parent_path(&self) -> Option<&str> {
        if self.is_root() {
            return None;
        }
        Some(self.path.rfind('/').map_or("", |pos| &self.path[..pos]))
    }

    pub fn children(&self) -> &[TreeObject] {
        &self.children
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TreeObject> {
        self.children.iter()
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&TreeObject> {
        self.children.iter().find(|child| child.name() == name)
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = &'a TreeObject;
    type IntoIter = std::slice::Iter<'a, TreeObject>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

pub(crate) fn normalize(path: &str) -> String {
    path.trim_matches('/').to_string()
}
