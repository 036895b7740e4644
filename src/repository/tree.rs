//! Tree listings

use crate::error::{require_reference, Error, Result};
use crate::git::command::ls_tree;
use crate::objects::tree::normalize;
use crate::objects::{Tree, TreeObject, Treeish};

use super::Repository;

impl Repository {
    /// Contents of directory `path` at `treeish`; the root when `path` is
    /// `None` or empty
    pub fn tree(&self, treeish: &(impl Treeish + ?Sized), path: Option<&str>) -> Result<Tree> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let dir = normalize(path.unwrap_or(""));

        if dir.is_empty() {
            let lines = self.output_lines(&ls_tree::tree(reference, None), true)?;
            return Ok(Tree::new(reference, "", TreeObject::from_output_lines(&lines)?));
        }

        match self.tree_object(reference, &dir)? {
            Some(obj) if obj.is_tree() => {}
            Some(_) => {
                return Err(Error::InvalidArgument(format!(
                    "{dir} is not a directory at {reference}"
                )))
            }
            None => {
                return Err(Error::InvalidArgument(format!(
                    "{dir} does not exist at {reference}"
                )))
            }
        }

        let listing = format!("{dir}/");
        let lines = self.output_lines(&ls_tree::tree(reference, Some(&listing)), true)?;
        Ok(Tree::new(reference, dir, TreeObject::from_output_lines(&lines)?))
    }

    /// The single entry at `path`, if present
    pub fn tree_object(&self, treeish: &(impl Treeish + ?Sized), path: &str) -> Result<Option<TreeObject>> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let path = normalize(path);
        if path.is_empty() {
            return Ok(None);
        }
        let lines = self.output_lines(&ls_tree::tree(reference, Some(&path)), true)?;
        let objects = TreeObject::from_output_lines(&lines)?;
        Ok(objects.into_iter().find(|obj| obj.full_path() == path))
    }

    /// Every blob under `treeish`
    pub fn files(&self, treeish: &(impl Treeish + ?Sized)) -> Result<Vec<TreeObject>> {
        let reference = treeish.treeish();
        require_reference(reference, "treeish")?;
        let lines = self.output_lines(&ls_tree::list_all(reference), true)?;
        TreeObject::from_output_lines(&lines)
    }
}
