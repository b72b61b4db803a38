use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A named task container. Folders nest through `children`, forming a
/// forest; `parent_id` references the owning folder when present. The
/// server guarantees the referenced parent exists and the tree is
/// acyclic.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Folder>,
}

/// Creation payload for POST /folders.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct NewFolder {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl NewFolder {
    pub fn new(name: &str, parent_id: Option<&str>) -> Self {
        NewFolder {
            name: name.to_string(),
            parent_id: parent_id.map(str::to_string),
        }
    }
}

/// Depth-first search over a folder forest. Returns the first folder
/// whose id matches, descending into `children` before moving to the
/// next sibling. Terminates because the tree is finite and acyclic.
pub fn find_folder<'a>(folders: &'a [Folder], id: &str) -> Option<&'a Folder> {
    for folder in folders {
        if folder.id == id {
            return Some(folder);
        }
        if let Some(found) = find_folder(&folder.children, id) {
            return Some(found);
        }
    }
    None
}
