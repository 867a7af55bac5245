use fake_xenos::{
    CAPE, DEFAULT_SKIN, FakeXenos, HEAD, HEAD_OVERLAY, HERBERT_ID, HYDROFIN_ID, Mode, SCRAYOS_ID,
    SKIN, TEXTURES, TIMESTAMP,
};
use futures_util::future::join_all;
use std::time::Duration;
use tonic::Code;
use xenos_client::{
    ClientBuildError, Lookup, XenosClient, XenosConfig, XenosError, data::MappingError,
    data::Property, proto::profile_server::ProfileServer, texture, uuid::Uuid,
};


const MISSING_ID: Uuid = Uuid::nil();

fn client() -> XenosClient<ProfileServer<FakeXenos>> {
    XenosClient::from_service(ProfileServer::new(FakeXenos::new()))
}

fn client_with(mode: Mode) -> XenosClient<ProfileServer<FakeXenos>> {
    XenosClient::from_service(ProfileServer::new(FakeXenos::with_mode(mode)))
}

#[tokio::test]
async fn test_new_does_not_connect() {
    assert!(XenosClient::new("localhost").is_ok());
    assert!(XenosClient::with_port("127.0.0.1", 1).is_ok());
    assert!(XenosClient::from_config(&XenosConfig::new("xenos.invalid").with_port(4242)).is_ok());
}

#[tokio::test]
async fn test_invalid_host_is_rejected() {
    match XenosClient::with_port("not a host", 50051) {
        Err(ClientBuildError::InvalidAddress { host, port, .. }) => {
            assert_eq!(host, "not a host");
            assert_eq!(port, 50051);
        }
        Ok(_) => panic!("client was created for an invalid host"),
    }
}

#[tokio::test]
async fn test_ipv6_host_is_accepted() {
    assert!(XenosClient::with_port("::1", 50051).is_ok());
    assert!(XenosClient::with_port("[::1]", 50051).is_ok());
    assert!(XenosClient::new("fe80::1").is_ok());
}

#[tokio::test]
async fn test_unreachable_xenos_is_unavailable() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = XenosClient::with_port("127.0.0.1", port).unwrap();

    let result = tokio::time::timeout(Duration::from_secs(10), client.get_profile(SCRAYOS_ID))
        .await
        .expect("lookup against a closed port hangs");

    match result {
        Err(XenosError::Unavailable { lookup, status }) => {
            assert_eq!(lookup, Lookup::Profile);
            assert_eq!(status.code(), Code::Unavailable);
        }
        other => panic!("expected unavailable profile lookup, got {other:?}"),
    }

    client.close().await;
}

#[tokio::test]
async fn test_get_uuid_returns_canonical_name() {
    let client = client();

    let info = client.get_uuid("ScRaYoS").await.unwrap().unwrap();

    assert_eq!(info.id, SCRAYOS_ID);
    assert_eq!(info.username, "Scrayos");
    assert_eq!(info.retrieved_at.timestamp(), TIMESTAMP as i64);
}

#[tokio::test]
async fn test_get_uuid_missing_name() {
    let client = client();

    assert!(client.get_uuid("missingname").await.unwrap().is_none());
    assert!(client.get_uuid("#").await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_uuids_empty_request() {
    let client = client();

    let resolved = client.get_uuids(Vec::<String>::new()).await.unwrap();

    assert!(resolved.is_empty());
}

#[tokio::test]
async fn test_get_uuids_resolves_multiple_names() {
    let client = client();

    let resolved = client
        .get_uuids(["scrayos", "Hydrofin", "missingname"])
        .await
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved["scrayos"].id, SCRAYOS_ID);
    assert_eq!(resolved["scrayos"].username, "Scrayos");
    assert_eq!(resolved["hydrofin"].id, HYDROFIN_ID);
}

#[tokio::test]
async fn test_get_uuids_collapses_casing() {
    let client = client();

    let resolved = client
        .get_uuids(vec![
            "scrayos".to_string(),
            "sCrAyOs".to_string(),
            "missingname".to_string(),
        ])
        .await
        .unwrap();

    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved["scrayos"].username, "Scrayos");
}

#[tokio::test]
async fn test_get_uuids_only_missing_names() {
    let client = client();

    let resolved = client.get_uuids(["missingname", "ä"]).await.unwrap();

    assert!(resolved.is_empty());
}

#[tokio::test]
async fn test_get_profile() {
    let client = client();

    let profile = client.get_profile(SCRAYOS_ID).await.unwrap().unwrap();

    assert_eq!(profile.id, SCRAYOS_ID);
    assert_eq!(profile.name, "Scrayos");
    assert_eq!(profile.properties.len(), 1);
    assert!(profile.properties.contains(&Property {
        name: "textures".to_string(),
        value: TEXTURES.to_string(),
        signature: None,
    }));
    assert!(profile.actions.is_empty());
}

#[tokio::test]
async fn test_get_profile_actions() {
    let client = client();

    let profile = client.get_profile(HYDROFIN_ID).await.unwrap().unwrap();

    assert!(profile.actions.contains("FORCED_NAME_CHANGE"));
}

#[tokio::test]
async fn test_get_profile_missing_id() {
    let client = client();

    assert!(client.get_profile(MISSING_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_skin() {
    let client = client();

    let skin = client.get_skin(SCRAYOS_ID).await.unwrap().unwrap();

    assert_eq!(skin.texture, texture::decode(SKIN).unwrap());
    assert!(!skin.default);
}

#[tokio::test]
async fn test_get_skin_default() {
    let client = client();

    let skin = client.get_skin(HERBERT_ID).await.unwrap().unwrap();

    assert_eq!(skin.texture, texture::decode(DEFAULT_SKIN).unwrap());
    assert!(skin.default);
}

#[tokio::test]
async fn test_get_skin_missing_id() {
    let client = client();

    assert!(client.get_skin(MISSING_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_cape() {
    let client = client();

    let cape = client.get_cape(HYDROFIN_ID).await.unwrap().unwrap();

    assert_eq!(cape.texture, texture::decode(CAPE).unwrap());
}

#[tokio::test]
async fn test_get_cape_missing() {
    let client = client();

    assert!(client.get_cape(SCRAYOS_ID).await.unwrap().is_none());
    assert!(client.get_cape(MISSING_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_head_with_and_without_overlay() {
    let client = client();

    let head = client.get_head(SCRAYOS_ID, false).await.unwrap().unwrap();
    let overlay = client.get_head(SCRAYOS_ID, true).await.unwrap().unwrap();

    assert_eq!(head.texture, texture::decode(HEAD).unwrap());
    assert_eq!(overlay.texture, texture::decode(HEAD_OVERLAY).unwrap());
    assert_ne!(head.texture, overlay.texture);
    assert!(!head.default);
}

#[tokio::test]
async fn test_get_head_default() {
    let client = client();

    let head = client.get_head(HERBERT_ID, false).await.unwrap().unwrap();

    assert!(head.default);
}

#[tokio::test]
async fn test_get_head_missing_id() {
    let client = client();

    assert!(client.get_head(MISSING_ID, true).await.unwrap().is_none());
}

#[tokio::test]
async fn test_unavailable_names_the_lookup() {
    let client = client_with(Mode::Unavailable);

    let errors = [
        (Lookup::Uuid, client.get_uuid("scrayos").await.map(|_| ())),
        (Lookup::Profile, client.get_profile(SCRAYOS_ID).await.map(|_| ())),
        (Lookup::Skin, client.get_skin(SCRAYOS_ID).await.map(|_| ())),
        (Lookup::Cape, client.get_cape(SCRAYOS_ID).await.map(|_| ())),
        (Lookup::Head, client.get_head(SCRAYOS_ID, false).await.map(|_| ())),
    ];

    for (expected, result) in errors {
        match result {
            Err(XenosError::Unavailable { lookup, status }) => {
                assert_eq!(lookup, expected);
                assert_eq!(status.code(), Code::Unavailable);
                assert_eq!(status.message(), "Mojang API is unreachable");
            }
            other => panic!("expected unavailable {expected} lookup, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_get_uuids_does_not_translate_unavailable() {
    let client = client_with(Mode::Unavailable);

    let err = client.get_uuids(["scrayos"]).await.unwrap_err();

    assert!(matches!(err, XenosError::Status(status) if status.code() == Code::Unavailable));
}

#[tokio::test]
async fn test_other_statuses_pass_through() {
    let client = client_with(Mode::Failing);

    let err = client.get_profile(SCRAYOS_ID).await.unwrap_err();
    assert!(matches!(
        err,
        XenosError::Status(status)
            if status.code() == Code::Internal && status.message() == "cache is corrupted"
    ));

    let err = client.get_uuids(["scrayos"]).await.unwrap_err();
    assert!(matches!(err, XenosError::Status(status) if status.code() == Code::Internal));
}

#[tokio::test]
async fn test_concurrent_lookups_share_the_client() {
    let client = client();

    let lookups = (0..16).map(|i| {
        let name = if i % 2 == 0 { "scrayos" } else { "HYDROFIN" };
        client.get_uuid(name)
    });

    let results = join_all(lookups).await;

    assert_eq!(results.len(), 16);
    for (i, result) in results.into_iter().enumerate() {
        let info = result.unwrap().unwrap();
        let expected = if i % 2 == 0 { SCRAYOS_ID } else { HYDROFIN_ID };
        assert_eq!(info.id, expected);
    }
}

#[tokio::test]
async fn test_malformed_texture_is_a_mapping_error() {
    let err = texture::decode(&[]).unwrap_err();
    let err = XenosError::from(MappingError::from(err));

    assert!(matches!(err, XenosError::Mapping(MappingError::Texture(_))));
    assert_eq!(
        err.to_string(),
        "Xenos responded with an invalid texture: 'Image cannot be created from empty bytes!'"
    );
}
