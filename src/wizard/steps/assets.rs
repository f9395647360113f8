use crate::domain::{FieldUpdate, FileAsset, FormRecord};

use super::{lists, Control, StepField};

/// Which asset list a file control edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileSlot {
    Reference,
    Logo,
    Background,
}

impl FileSlot {
    pub fn read(self, record: &FormRecord) -> Vec<FileAsset> {
        match self {
            FileSlot::Reference => record.reference_files.clone(),
            FileSlot::Logo => record.logo_files.clone(),
            FileSlot::Background => record.background_file.iter().cloned().collect(),
        }
    }

    /// Background holds a single file; the others accumulate.
    pub fn accepts_many(self) -> bool {
        !matches!(self, FileSlot::Background)
    }

    pub fn add(self, record: &FormRecord, picked: Vec<FileAsset>) -> Vec<FieldUpdate> {
        match self {
            FileSlot::Reference => vec![FieldUpdate::ReferenceFiles(append_files(
                &record.reference_files,
                picked,
            ))],
            FileSlot::Logo => vec![FieldUpdate::LogoFiles(append_files(
                &record.logo_files,
                picked,
            ))],
            FileSlot::Background => match picked.into_iter().last() {
                Some(asset) => vec![replace_background(asset)],
                None => Vec::new(),
            },
        }
    }

    pub fn remove(self, record: &FormRecord, index: usize) -> Vec<FieldUpdate> {
        match self {
            FileSlot::Reference => vec![FieldUpdate::ReferenceFiles(remove_file_at(
                &record.reference_files,
                index,
            ))],
            FileSlot::Logo => vec![FieldUpdate::LogoFiles(remove_file_at(
                &record.logo_files,
                index,
            ))],
            FileSlot::Background if index == 0 && record.background_file.is_some() => {
                vec![FieldUpdate::BackgroundFile(None)]
            }
            FileSlot::Background => Vec::new(),
        }
    }
}

pub fn append_files(existing: &[FileAsset], picked: Vec<FileAsset>) -> Vec<FileAsset> {
    let mut next = existing.to_vec();
    next.extend(picked);
    next
}

pub fn replace_background(asset: FileAsset) -> FieldUpdate {
    FieldUpdate::BackgroundFile(Some(asset))
}

pub fn remove_file_at(files: &[FileAsset], index: usize) -> Vec<FileAsset> {
    lists::remove_at(files, index)
}

pub fn fields() -> Vec<StepField> {
    vec![
        StepField::new(
            "referenceFiles",
            "Reference Files",
            Control::Files(FileSlot::Reference),
        )
        .hint("Mockups, briefs or documents"),
        StepField::new("logoFiles", "Logo Files", Control::Files(FileSlot::Logo)),
        StepField::new(
            "backgroundFile",
            "Background Image",
            Control::Files(FileSlot::Background),
        ),
    ]
}

pub fn can_advance(_record: &FormRecord) -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_files_accumulate() {
        let mut record = FormRecord::default();
        record.apply(FileSlot::Reference.add(&record, vec![FileAsset::new("a.pdf", 1)]));
        record.apply(FileSlot::Reference.add(
            &record,
            vec![FileAsset::new("b.pdf", 2), FileAsset::new("a.pdf", 1)],
        ));
        let names: Vec<_> = record.reference_files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["a.pdf", "b.pdf", "a.pdf"]);
    }

    #[test]
    fn background_is_replaced() {
        let mut record = FormRecord::default();
        record.apply(FileSlot::Background.add(&record, vec![FileAsset::new("one.jpg", 1)]));
        record.apply(FileSlot::Background.add(&record, vec![FileAsset::new("two.jpg", 2)]));
        assert_eq!(record.background_file.as_ref().unwrap().name, "two.jpg");
        record.apply(FileSlot::Background.remove(&record, 0));
        assert!(record.background_file.is_none());
    }

    #[test]
    fn removal_is_by_position() {
        let mut record = FormRecord::default();
        record.logo_files = vec![FileAsset::new("x.png", 1), FileAsset::new("y.png", 1)];
        record.apply(FileSlot::Logo.remove(&record, 5));
        assert_eq!(record.logo_files.len(), 2);
        record.apply(FileSlot::Logo.remove(&record, 0));
        assert_eq!(record.logo_files[0].name, "y.png");
    }
}
