use super::prelude::*;
use crate::gateways::photos::{photo_path, PhotoStorageGateway};

/// Stores an issue photo and returns its public URL.
pub fn upload_photo<S: PhotoStorageGateway + ?Sized>(
    storage: &S,
    account: &Profile,
    original_name: Option<&str>,
    data: &[u8],
) -> Result<String> {
    if account.role != Role::User {
        return Err(Error::Forbidden);
    }
    if data.is_empty() {
        return Err(Error::EmptyPhoto);
    }
    let path = photo_path(Timestamp::now(), original_name);
    log::debug!("Storing {} bytes as {path}", data.len());
    let url = storage
        .store(&path, data)
        .map_err(|err| Error::Repo(err.into()))?;
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateways::mock::MockPhotoStorage;
    use civic_entities::builders::*;

    #[test]
    fn store_photo() {
        let storage = MockPhotoStorage::default();
        let user = Profile::build().finish();
        let url = upload_photo(&storage, &user, Some("lamp.png"), b"png").unwrap();
        assert!(url.starts_with("https://photos.example.org/uploads/"));
        assert!(url.ends_with("-lamp.png"));
        assert_eq!(1, storage.objects.borrow().len());
    }

    #[test]
    fn reject_empty_photos_and_admins() {
        let storage = MockPhotoStorage::default();
        let user = Profile::build().finish();
        assert!(matches!(
            upload_photo(&storage, &user, None, b""),
            Err(Error::EmptyPhoto)
        ));
        let admin = Profile::build().role(Role::Admin).finish();
        assert!(matches!(
            upload_photo(&storage, &admin, None, b"jpg"),
            Err(Error::Forbidden)
        ));
    }
}
