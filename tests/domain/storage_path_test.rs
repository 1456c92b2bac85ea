use docstudy::domain::{ContentType, DocumentId, StoragePath};

#[test]
fn given_document_id_when_creating_path_then_format_is_documents_uuid_extension() {
    let id = DocumentId::new();

    let path = StoragePath::for_document(&id, ContentType::Pdf);

    assert_eq!(path.as_str(), format!("documents/{}.pdf", id.as_uuid()));
    assert_eq!(path.file_name(), format!("{}.pdf", id.as_uuid()));
}

#[test]
fn given_two_documents_when_creating_paths_then_paths_differ() {
    let a = StoragePath::for_document(&DocumentId::new(), ContentType::Text);
    let b = StoragePath::for_document(&DocumentId::new(), ContentType::Text);

    assert_ne!(a, b);
}

#[test]
fn given_generated_audio_name_when_creating_path_then_lands_in_audio_directory() {
    let path = StoragePath::for_audio("3f2a9c1e-segment.mp3").unwrap();

    assert_eq!(path.as_str(), "audio/3f2a9c1e-segment.mp3");
}

#[test]
fn given_traversal_or_hidden_names_when_creating_audio_path_then_rejected() {
    for name in ["../metadata.json", "a/b.mp3", ".hidden", "", "voice clip.mp3"] {
        assert!(StoragePath::for_audio(name).is_none(), "{} accepted", name);
    }
}

#[test]
fn given_storage_path_when_displayed_then_matches_as_str() {
    let path = StoragePath::for_document(&DocumentId::new(), ContentType::Text);

    assert_eq!(format!("{}", path), path.as_str());
}
