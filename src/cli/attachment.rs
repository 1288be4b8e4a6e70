//! Attachment CLI commands
//!
//! Attachments are addressed by expense ID and their 1-based position in the
//! expense's attachment list.

use std::path::PathBuf;

use clap::Subcommand;

use crate::display::expense::format_size;
use crate::error::{HousingError, HousingResult};
use crate::models::{Attachment, Expense};
use crate::state::ExpenseStore;
use crate::storage::{BlobStore, StateStore};

use super::require_expense;

/// Attachment subcommands
#[derive(Subcommand)]
pub enum AttachmentCommands {
    /// Attach files to an expense
    Add {
        /// Expense ID
        expense: String,
        /// Files to attach
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Detach a file from an expense
    Remove {
        /// Expense ID
        expense: String,
        /// Attachment number as shown by `expense show`
        index: usize,
    },

    /// Print the path of an attachment's stored content
    Path {
        /// Expense ID
        expense: String,
        /// Attachment number as shown by `expense show`
        index: usize,
    },

    /// Delete stored files no expense refers to
    Prune,
}

/// Handle an attachment command
pub fn handle_attachment_command<S: StateStore>(
    store: &mut ExpenseStore<S>,
    blobs: &BlobStore,
    cmd: AttachmentCommands,
) -> HousingResult<()> {
    match cmd {
        AttachmentCommands::Add { expense, files } => {
            let mut updated = require_expense(store, &expense)?.clone();
            for path in &files {
                let attachment = blobs.attach_file(path)?;
                println!("Attached {} ({})", attachment.name, format_size(attachment.size));
                updated.attachments.push(attachment);
            }
            store.update_expense(updated)?;
        }

        AttachmentCommands::Remove { expense, index } => {
            let mut updated = require_expense(store, &expense)?.clone();
            let position = position_of(&updated, index)?;
            let removed = updated.attachments.remove(position);
            store.update_expense(updated)?;
            println!("Removed attachment: {}", removed.name);
        }

        AttachmentCommands::Path { expense, index } => {
            let expense = require_expense(store, &expense)?;
            let attachment = attachment_at(expense, index)?;
            // Reading checks the content against its hash
            blobs.read(attachment)?;
            let path = blobs
                .resolve(attachment)
                .ok_or_else(|| HousingError::attachment_not_found(&attachment.name))?;
            println!("{}", path.display());
        }

        AttachmentCommands::Prune => {
            let report = blobs.prune(store.state())?;
            println!(
                "Removed {} unreferenced file(s), freed {}",
                report.removed,
                format_size(report.bytes_freed)
            );
        }
    }

    Ok(())
}

fn position_of(expense: &Expense, index: usize) -> HousingResult<usize> {
    if index == 0 || index > expense.attachments.len() {
        return Err(HousingError::attachment_not_found(format!(
            "#{} on {}",
            index, expense.id
        )));
    }
    Ok(index - 1)
}

fn attachment_at(expense: &Expense, index: usize) -> HousingResult<&Attachment> {
    Ok(&expense.attachments[position_of(expense, index)?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, Money};
    use crate::storage::MemoryStore;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn setup() -> (TempDir, BlobStore, ExpenseStore<MemoryStore>, String) {
        let temp_dir = TempDir::new().unwrap();
        let blobs = BlobStore::new(temp_dir.path().join("attachments"));
        let mut store = ExpenseStore::open(MemoryStore::new()).unwrap();
        let expense = store
            .add_expense(ExpenseDraft::new(
                "Dishwasher",
                Money::from_dollars(700),
                "Appliances",
                NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            ))
            .unwrap();
        (temp_dir, blobs, store, expense.id.to_string())
    }

    fn source(temp_dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
        let path = temp_dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[test]
    fn test_add_then_remove() {
        let (temp_dir, blobs, mut store, id) = setup();
        let files = vec![
            source(&temp_dir, "receipt.pdf", b"receipt"),
            source(&temp_dir, "warranty.pdf", b"warranty"),
        ];

        handle_attachment_command(&mut store, &blobs, AttachmentCommands::Add { expense: id.clone(), files })
            .unwrap();
        assert_eq!(store.expenses()[0].attachments.len(), 2);

        handle_attachment_command(&mut store, &blobs, AttachmentCommands::Remove { expense: id, index: 1 })
            .unwrap();
        let remaining = &store.expenses()[0].attachments;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].name, "warranty.pdf");
    }

    #[test]
    fn test_index_out_of_range() {
        let (_temp_dir, blobs, mut store, id) = setup();
        for index in [0, 1] {
            let err = handle_attachment_command(
                &mut store,
                &blobs,
                AttachmentCommands::Path {
                    expense: id.clone(),
                    index,
                },
            )
            .unwrap_err();
            assert!(err.is_not_found());
        }
    }

    #[test]
    fn test_prune_after_remove() {
        let (temp_dir, blobs, mut store, id) = setup();
        let files = vec![source(&temp_dir, "old.jpg", b"old photo")];
        handle_attachment_command(&mut store, &blobs, AttachmentCommands::Add { expense: id.clone(), files })
            .unwrap();
        handle_attachment_command(&mut store, &blobs, AttachmentCommands::Remove { expense: id, index: 1 })
            .unwrap();
        assert_eq!(blobs.stored_hashes().unwrap().len(), 1);

        handle_attachment_command(&mut store, &blobs, AttachmentCommands::Prune).unwrap();

        assert!(blobs.stored_hashes().unwrap().is_empty());
    }
}
