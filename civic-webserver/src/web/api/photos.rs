use super::*;
use rocket::data::{ByteUnit, Data};

#[post("/photos?<name>", data = "<data>")]
pub async fn post_photo(
    account: Account,
    gateways: &State<Gateways>,
    cfg: &State<Cfg>,
    name: Option<String>,
    data: Data<'_>,
) -> Result<json::PhotoUpload> {
    let limit = ByteUnit::from(cfg.max_photo_size);
    let bytes = data
        .open(limit)
        .into_bytes()
        .await
        .map_err(anyhow::Error::from)?;
    if !bytes.is_complete() {
        return Err(ApiError::OtherWithStatus(
            anyhow::anyhow!("The photo exceeds the limit of {limit}"),
            Status::PayloadTooLarge,
        ));
    }
    let bytes = bytes.into_inner();
    let storage = gateways.photos.clone();
    let profile = account.into_profile();
    let url = blocking(move || {
        usecases::upload_photo(&*storage, &profile, name.as_deref(), &bytes)
    })
    .await??;
    Ok(Json(json::PhotoUpload { url }))
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn upload_photo() {
        let (client, db, gateways) = setup_with_gateways();
        register_profile(&db, "jane@example.org", "secret");
        login(&client, "jane@example.org", "secret");
        let res = client
            .post("/photos?name=broken%20lamp.png")
            .header(ContentType::PNG)
            .body(&b"\x89PNG"[..])
            .dispatch();
        assert_eq!(Status::Ok, res.status());
        let upload: json::PhotoUpload = serde_json::from_str(&res.into_string().unwrap()).unwrap();
        assert!(upload.url.starts_with("http://localhost/photos/uploads/"));
        assert!(upload.url.ends_with("-broken_lamp.png"));
        assert_eq!(1, gateways.photos.stored.lock().len());
    }

    #[test]
    fn upload_empty_photo() {
        let (client, db) = setup();
        register_profile(&db, "jane@example.org", "secret");
        login(&client, "jane@example.org", "secret");
        let res = client.post("/photos").body("").dispatch();
        assert_eq!(Status::BadRequest, res.status());
    }

    #[test]
    fn upload_photo_requires_login() {
        let (client, _) = setup();
        let res = client.post("/photos").body("jpg").dispatch();
        assert_eq!(Status::Unauthorized, res.status());
    }
}
