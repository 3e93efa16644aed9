use serde::{Deserialize, Serialize};

/// Indicator value the web service uses for a present amenity.
pub const FLAG_PRESENT: &str = "あり";
/// Indicator value for shops that stay open past 23:00.
pub const FLAG_OPEN_LATE: &str = "営業している";
/// Indicator value for shops that accept card payment.
pub const FLAG_CARD_OK: &str = "利用可";

/// One restaurant record returned by the gourmet search endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Shop {
    pub name: String,
    pub address: String,
    pub access: String,
    pub genre: Genre,
    #[serde(default)]
    pub budget: Option<Budget>,
    #[serde(default)]
    pub open: Option<String>,
    #[serde(default)]
    pub catch: Option<String>,
    #[serde(default)]
    pub private_room: Option<String>,
    #[serde(default)]
    pub wifi: Option<String>,
    #[serde(default)]
    pub free_drink: Option<String>,
    #[serde(default)]
    pub free_food: Option<String>,
    #[serde(default)]
    pub lunch: Option<String>,
    #[serde(default)]
    pub midnight: Option<String>,
    #[serde(default)]
    pub parking: Option<String>,
    #[serde(default)]
    pub card: Option<String>,
    #[serde(default)]
    pub capacity: Option<u32>,
    pub urls: ShopUrls,
    #[serde(default)]
    pub photo: Option<Photo>,
}

impl Shop {
    /// Whether the private-room indicator carries the presence value
    pub fn has_private_room(&self) -> bool {
        self.private_room.as_deref() == Some(FLAG_PRESENT)
    }

    pub fn has_wifi(&self) -> bool {
        self.wifi.as_deref() == Some(FLAG_PRESENT)
    }

    pub fn has_free_drink(&self) -> bool {
        self.free_drink.as_deref() == Some(FLAG_PRESENT)
    }

    pub fn has_free_food(&self) -> bool {
        self.free_food.as_deref() == Some(FLAG_PRESENT)
    }

    pub fn has_lunch(&self) -> bool {
        self.lunch.as_deref() == Some(FLAG_PRESENT)
    }

    pub fn open_past_midnight(&self) -> bool {
        self.midnight.as_deref() == Some(FLAG_OPEN_LATE)
    }

    pub fn has_parking(&self) -> bool {
        self.parking.as_deref() == Some(FLAG_PRESENT)
    }

    pub fn accepts_card(&self) -> bool {
        self.card.as_deref() == Some(FLAG_CARD_OK)
    }

    /// Large photo URL, when the record carries one
    pub fn photo_url(&self) -> Option<&str> {
        self.photo.as_ref()?.pc.as_ref()?.l.as_deref()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Genre {
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Budget {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub average: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShopUrls {
    pub pc: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Photo {
    #[serde(default)]
    pub pc: Option<PhotoPc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PhotoPc {
    #[serde(default)]
    pub l: Option<String>,
}

/// A shop together with its computed priority score
#[derive(Debug, Clone)]
pub struct ScoredShop {
    pub shop: Shop,
    pub score: u32,
}

/// One code/label pair from a master-data list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MasterEntry {
    pub code: String,
    pub name: String,
}

/// Which master-data list to read out of the response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MasterDataKind {
    Genre,
    Budget,
    LargeArea,
    Special,
}

/// Top-level response envelope returned by every endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse {
    pub results: ApiResults,
}

/// The `results` object; populated sub-fields vary by endpoint
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResults {
    #[serde(default)]
    pub shop: Option<Vec<Shop>>,
    #[serde(default)]
    pub genre: Option<Vec<MasterEntry>>,
    #[serde(default)]
    pub budget: Option<Vec<MasterEntry>>,
    #[serde(default)]
    pub large_area: Option<Vec<MasterEntry>>,
    #[serde(default)]
    pub special: Option<Vec<MasterEntry>>,
    #[serde(default)]
    pub results_available: Option<u64>,
}

impl ApiResults {
    /// The master-data list for `kind`, empty when the endpoint returned none
    pub fn master_entries(&self, kind: MasterDataKind) -> &[MasterEntry] {
        let entries = match kind {
            MasterDataKind::Genre => &self.genre,
            MasterDataKind::Budget => &self.budget,
            MasterDataKind::LargeArea => &self.large_area,
            MasterDataKind::Special => &self.special,
        };
        entries.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amenity_helpers_use_exact_indicator_values() {
        let shop = Shop {
            free_drink: Some(FLAG_PRESENT.to_string()),
            midnight: Some(FLAG_OPEN_LATE.to_string()),
            card: Some("なし".to_string()),
            ..Shop::default()
        };

        assert!(shop.has_free_drink());
        assert!(shop.open_past_midnight());
        // Any value other than the indicator counts as absent
        assert!(!shop.accepts_card());
        assert!(!shop.has_private_room());
    }

    #[test]
    fn test_photo_url_requires_full_chain() {
        let mut shop = Shop::default();
        assert_eq!(shop.photo_url(), None);

        shop.photo = Some(Photo { pc: Some(PhotoPc { l: None }) });
        assert_eq!(shop.photo_url(), None);

        shop.photo = Some(Photo {
            pc: Some(PhotoPc {
                l: Some("https://img.example.com/shop.jpg".to_string()),
            }),
        });
        assert_eq!(shop.photo_url(), Some("https://img.example.com/shop.jpg"));
    }

    #[test]
    fn test_master_entries_defaults_to_empty() {
        let results = ApiResults::default();
        assert!(results.master_entries(MasterDataKind::Genre).is_empty());

        let results = ApiResults {
            budget: Some(vec![MasterEntry {
                code: "B001".to_string(),
                name: "1501～2000円".to_string(),
            }]),
            ..ApiResults::default()
        };
        assert_eq!(results.master_entries(MasterDataKind::Budget).len(), 1);
        assert!(results.master_entries(MasterDataKind::Special).is_empty());
    }

    #[test]
    fn test_shop_deserializes_from_api_shape() {
        let json = r#"{
            "name": "炭火焼鳥 とり蔵",
            "address": "東京都新宿区西新宿1-1-1",
            "access": "新宿駅西口徒歩3分",
            "genre": {"name": "居酒屋"},
            "budget": {"name": "2001～3000円", "average": "2500円"},
            "open": "月～日 17:00～24:00",
            "free_drink": "あり",
            "capacity": 40,
            "urls": {"pc": "https://www.hotpepper.jp/strJ000000001/"},
            "photo": {"pc": {"l": "https://imgfp.hotp.jp/l.jpg"}}
        }"#;

        let shop: Shop = serde_json::from_str(json).expect("shop should deserialize");
        assert_eq!(shop.capacity, Some(40));
        assert!(shop.has_free_drink());
        assert!(!shop.has_wifi());
        assert_eq!(shop.photo_url(), Some("https://imgfp.hotp.jp/l.jpg"));
    }
}
