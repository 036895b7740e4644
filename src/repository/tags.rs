//! Tag listing and management

use tracing::debug;

use crate::error::{require_reference, Error, Result};
use crate::git::command::tag;
use crate::objects::Tag;

use super::Repository;

impl Repository {
    pub fn tags(&self) -> Result<Vec<Tag>> {
        let command = tag::list();
        let (status, output) = self.caller().run(&command, self.path())?;
        // show-ref exits 1 when nothing matched
        if !status.success() {
            if status.code() == Some(1) && output.stdout.trim().is_empty() {
                return Ok(Vec::new());
            }
            return Err(Error::CommandFailed {
                command: command.to_string(),
                code: status.code(),
                stderr: output.stderr.trim().to_string(),
            });
        }
        Tag::from_output_lines(&output.non_empty_lines())
    }

    pub fn tag(&self, name: &str) -> Result<Option<Tag>> {
        require_reference(name, "tag name")?;
        Ok(self.tags()?.into_iter().find(|t| t.name() == name))
    }

    /// Create a tag; with a `message` it is annotated
    pub fn create_tag(&self, name: &str, start_point: Option<&str>, message: Option<&str>) -> Result<()> {
        require_reference(name, "tag name")?;
        if let Some(start) = start_point {
            require_reference(start, "start point")?;
        }
        self.execute(&tag::create(name, start_point, message))?;
        debug!(name, annotated = message.is_some(), "created tag");
        Ok(())
    }

    pub fn delete_tag(&self, name: &str) -> Result<()> {
        require_reference(name, "tag name")?;
        self.execute(&tag::delete(name))?;
        debug!(name, "deleted tag");
        Ok(())
    }
}
