use super::*;

/// Tests storing a photo record returned by the image host.
///
/// Expected: Ok(Photo) with the host's url and public id
#[tokio::test]
async fn creates_photo() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Photo)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let photo = PhotoRepository::new(db)
        .create(CreatePhotoParam {
            title: "Sunset".to_string(),
            url: "https://res.cloudinary.com/demo/image/upload/sunset.jpg".to_string(),
            public_id: "sunset".to_string(),
        })
        .await?;

    assert_eq!(photo.title, "Sunset");
    assert_eq!(photo.public_id, "sunset");
    assert!(photo.url.ends_with("sunset.jpg"));

    Ok(())
}
