//! tests/common.rs
//! Shared constants and a fixture-vault builder.
//!
//! The fixture is sealed with the library's own `seal` / `wrap_item_key`
//! so every test can start from known plaintext.

#![allow(dead_code)] // Each test binary uses a different subset

use base64::{engine::general_purpose::STANDARD, Engine as _};
use opvault_rs::aliases::Key32;
use opvault_rs::item::wrap_item_key;
use opvault_rs::opdata::seal;
use opvault_rs::{
    derive_key_pair, Category, Folder, Item, KdfPolicy, KeyPair, ProfileData, SecretBuffer,
};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Fast iteration count for tests - KDF cost is measured in benches/
pub const TEST_ITERATIONS: u32 = 100;

pub const TEST_PASSWORD: &str = "freddy";
pub const WRONG_PASSWORD: &str = "thisIsATestPassword123!";
pub const TEST_PROFILE: &str = "default";
pub const TEST_SALT: [u8; 16] = [
    0x3f, 0x1c, 0x8a, 0x02, 0x55, 0xe1, 0x90, 0x7b, 0x44, 0x0d, 0xc3, 0x6e, 0x19, 0xa8, 0x2f, 0xb6,
];

pub const MASTER_SEED: [u8; 256] = [0x4d; 256];
pub const OVERVIEW_SEED: [u8; 64] = [0x6f; 64];

pub const LOGIN_UUID: &str = "2E64A8F5C1B34D0F9A7B6C5D4E3F2A1B";
pub const PASSWORD_UUID: &str = "7C0F1E2D3C4B5A69788796A5B4C3D2E1";
pub const NOTE_UUID: &str = "B1A2C3D4E5F60718293A4B5C6D7E8F90";
pub const FOLDER_UUID: &str = "F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF";

/// Everything a test needs to check decrypted output against.
pub struct Fixture {
    pub profile: ProfileData,
    pub master: KeyPair,
    pub overview: KeyPair,
    pub items: Vec<Item>,
    pub folders: Vec<Folder>,
}

fn expand(seed: &[u8]) -> KeyPair {
    KeyPair::from_seed(&mut SecretBuffer::from_slice(seed)).unwrap()
}

fn item_pair(n: u8) -> KeyPair {
    KeyPair::new(Key32::new([n; 32]), Key32::new([n.wrapping_add(0x80); 32]))
}

fn sealed_item(
    n: u8,
    uuid: &str,
    category: Category,
    folder: Option<&str>,
    overview_json: Value,
    detail_json: Value,
    master: &KeyPair,
    overview: &KeyPair,
) -> Item {
    let keys = item_pair(n);
    Item {
        uuid: uuid.to_string(),
        category,
        created: 1_400_000_000 + i64::from(n),
        updated: 1_500_000_000 + i64::from(n),
        tx: 1_500_000_100,
        folder: folder.map(str::to_string),
        trashed: false,
        fave: None,
        k: wrap_item_key(&keys, master, &[n; 16]).unwrap(),
        o: seal(overview_json.to_string().as_bytes(), overview).unwrap(),
        d: seal(detail_json.to_string().as_bytes(), &keys).unwrap(),
    }
}

/// Build a profile sealed under `password` with three items and one folder.
pub fn build_fixture(password: &str) -> Fixture {
    let derived = derive_key_pair(
        &SecretBuffer::from(password),
        &TEST_SALT,
        TEST_ITERATIONS,
        &KdfPolicy::new(),
    )
    .unwrap();

    let profile = ProfileData {
        name: TEST_PROFILE.to_string(),
        uuid: "0C1B2A39485766758493A2B1C0D0E0F0".to_string(),
        salt: TEST_SALT.to_vec(),
        iterations: TEST_ITERATIONS,
        master_key: seal(&MASTER_SEED, &derived).unwrap(),
        overview_key: seal(&OVERVIEW_SEED, &derived).unwrap(),
        password_hint: Some("the dog".to_string()),
        created_at: 1_373_753_414,
        updated_at: 1_373_754_128,
    };

    let master = expand(&MASTER_SEED);
    let overview = expand(&OVERVIEW_SEED);

    let items = vec![
        sealed_item(
            1,
            LOGIN_UUID,
            Category::Login,
            Some(FOLDER_UUID),
            json!({"title": "Bank", "ainfo": "jane", "url": "https://bank.example",
                   "URLs": [{"l": "website", "u": "https://bank.example"}], "tags": ["finance"], "ps": 60}),
            json!({"fields": [
                {"name": "username", "value": "jane", "type": "T", "designation": "username"},
                {"name": "password", "value": "s3cret!", "type": "P", "designation": "password"}
            ]}),
            &master,
            &overview,
        ),
        sealed_item(
            2,
            PASSWORD_UUID,
            Category::Password,
            None,
            json!({"title": "Wi-Fi", "ps": 40}),
            json!({"password": "hunter2"}),
            &master,
            &overview,
        ),
        sealed_item(
            3,
            NOTE_UUID,
            Category::SecureNote,
            None,
            json!({"title": "Meeting"}),
            json!({"notesPlain": "meet at noon"}),
            &master,
            &overview,
        ),
    ];

    let folders = vec![Folder {
        uuid: FOLDER_UUID.to_string(),
        created: 1_373_753_500,
        updated: 1_373_753_600,
        tx: 1_373_753_700,
        parent: None,
        smart: false,
        overview: seal(json!({"title": "Work"}).to_string().as_bytes(), &overview).unwrap(),
    }];

    Fixture {
        profile,
        master,
        overview,
        items,
        folders,
    }
}

fn b64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Write `fixture` as `<dir>/<profile name>/{profile.js, folders.js, band_X.js}`.
pub fn write_vault(fixture: &Fixture, dir: &Path) {
    let profile_dir = dir.join(&fixture.profile.name);
    fs::create_dir_all(&profile_dir).unwrap();

    let p = &fixture.profile;
    let profile_json = json!({
        "lastUpdatedBy": "Dropbox",
        "updatedAt": p.updated_at,
        "profileName": p.name,
        "salt": b64(&p.salt),
        "passwordHint": p.password_hint.clone().unwrap_or_default(),
        "masterKey": b64(&p.master_key),
        "iterations": p.iterations,
        "uuid": p.uuid,
        "overviewKey": b64(&p.overview_key),
        "createdAt": p.created_at,
    });
    fs::write(profile_dir.join("profile.js"), format!("var profile={profile_json};")).unwrap();

    let mut folders = Map::new();
    for folder in &fixture.folders {
        folders.insert(
            folder.uuid.clone(),
            json!({
                "uuid": folder.uuid,
                "created": folder.created,
                "updated": folder.updated,
                "tx": folder.tx,
                "overview": b64(&folder.overview),
            }),
        );
    }
    fs::write(
        profile_dir.join("folders.js"),
        format!("loadFolders({});", Value::Object(folders)),
    )
    .unwrap();

    let mut bands: BTreeMap<char, Map<String, Value>> = BTreeMap::new();
    for item in &fixture.items {
        let mut entry = json!({
            "uuid": item.uuid,
            "category": item.category.code(),
            "created": item.created,
            "updated": item.updated,
            "tx": item.tx,
            "trashed": item.trashed,
            "k": b64(&item.k),
            "o": b64(&item.o),
            "d": b64(&item.d),
            "hmac": b64(&[0u8; 32]),
        });
        if let Some(folder) = &item.folder {
            entry["folder"] = json!(folder);
        }
        let band = item.uuid.chars().next().unwrap().to_ascii_uppercase();
        bands
            .entry(band)
            .or_default()
            .insert(item.uuid.clone(), entry);
    }
    for (band, entries) in bands {
        fs::write(
            profile_dir.join(format!("band_{band}.js")),
            format!("ld({});", Value::Object(entries)),
        )
        .unwrap();
    }
}
