//! AST dump loading

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::errors::{MetabaseError, Result};
use crate::features::parsing::domain::{CursorKind, CursorNode};

/// Read a JSON AST dump whose root is a translation unit
pub fn read_tree(path: impl AsRef<Path>) -> Result<CursorNode> {
    let file = File::open(path)?;
    tree_from_reader(BufReader::new(file))
}

pub fn tree_from_reader<R: Read>(reader: R) -> Result<CursorNode> {
    let root: CursorNode = serde_json::from_reader(reader)?;
    check_root(root)
}

pub fn tree_from_str(json: &str) -> Result<CursorNode> {
    let root: CursorNode = serde_json::from_str(json)?;
    check_root(root)
}

fn check_root(root: CursorNode) -> Result<CursorNode> {
    if root.kind != CursorKind::TranslationUnit {
        return Err(MetabaseError::invalid_input(format!(
            "root node is a {}, expected TranslationUnit",
            root.kind
        )));
    }
    Ok(root)
}
