use serde::Serialize;

/// Which deletion a confirmation prompt gates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptKind {
    Single { index: usize },
    Bulk { count: usize },
}

/// Text for the confirm/cancel dialog shown while a deletion is pending.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ConfirmationPrompt {
    pub kind: PromptKind,
    pub title: String,
    pub confirm_label: String,
    pub cancel_label: &'static str,
}

impl ConfirmationPrompt {
    pub(crate) fn single(index: usize) -> Self {
        Self {
            kind: PromptKind::Single { index },
            title: "Once this sticker is deleted it can't be retrieved.".to_string(),
            confirm_label: "Delete sticker".to_string(),
            cancel_label: "Cancel",
        }
    }

    pub(crate) fn bulk(count: usize) -> Self {
        Self {
            kind: PromptKind::Bulk { count },
            title: format!("Once these {count} stickers are deleted they can't be retrieved."),
            confirm_label: bulk_delete_label(count),
            cancel_label: "Cancel",
        }
    }
}

/// "Delete 1 sticker", "Delete 3 stickers".
pub fn bulk_delete_label(count: usize) -> String {
    if count == 1 {
        "Delete 1 sticker".to_string()
    } else {
        format!("Delete {count} stickers")
    }
}
