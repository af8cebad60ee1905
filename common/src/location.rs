//! City and district reference tables plus geolocation coordinates.

use serde::{Deserialize, Serialize};


/// Optional user position supplied by the browser; absence means the app
/// runs in "no coordinates" mode and distance features stay hidden.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// City scope of a listing. `None` at the query level means "all cities".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CityKey {
    Hcm,
    Hanoi,
}

impl CityKey {
    pub const ALL: &'static [CityKey] = &[CityKey::Hcm, CityKey::Hanoi];

    /// Stable key used in URLs.
    pub fn as_param(&self) -> &'static str {
        match self {
            CityKey::Hcm => "HCM",
            CityKey::Hanoi => "HN",
        }
    }

    /// Numeric id the restaurant API expects in its `city` parameter.
    pub fn api_id(&self) -> &'static str {
        match self {
            CityKey::Hcm => "1",
            CityKey::Hanoi => "2",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CityKey::Hcm => "Hồ Chí Minh",
            CityKey::Hanoi => "Hà Nội",
        }
    }

    pub fn from_param(raw: &str) -> Option<CityKey> {
        match raw {
            "HCM" | "1" => Some(CityKey::Hcm),
            "HN" | "2" => Some(CityKey::Hanoi),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct District {
    pub id: &'static str,
    pub name: &'static str,
}

pub const HCM_DISTRICTS: &[District] = &[
    District { id: "32", name: "Quận 1" },
    District { id: "28", name: "Quận 2" },
    District { id: "27", name: "Quận 3" },
    District { id: "26", name: "Quận 4" },
    District { id: "25", name: "Quận 5" },
    District { id: "24", name: "Quận 6" },
    District { id: "23", name: "Quận 7" },
    District { id: "22", name: "Quận 8" },
    District { id: "21", name: "Quận 9" },
    District { id: "31", name: "Quận 10" },
    District { id: "30", name: "Quận 11" },
    District { id: "29", name: "Quận 12" },
    District { id: "19", name: "Quận Bình Thạnh" },
    District { id: "6", name: "Quận Tân Bình" },
    District { id: "15", name: "Quận Gò Vấp" },
    District { id: "8", name: "Quận Phú Nhuận" },
    District { id: "2", name: "Thành phố Thủ Đức" },
    District { id: "18", name: "Quận Bình Tân" },
    District { id: "5", name: "Quận Tân Phú" },
    District { id: "52", name: "Huyện Bình Chánh" },
    District { id: "46", name: "Huyện Hóc Môn" },
    District { id: "43", name: "Huyện Nhà Bè" },
    District { id: "49", name: "Huyện Củ Chi" },
    District { id: "50", name: "Huyện Cần Giờ" },
];

pub const HANOI_DISTRICTS: &[District] = &[
    District { id: "20", name: "Quận Ba Đình" },
    District { id: "16", name: "Quận Cầu Giấy" },
    District { id: "3", name: "Quận Đống Đa" },
    District { id: "14", name: "Quận Hai Bà Trưng" },
    District { id: "13", name: "Quận Hoàn Kiếm" },
    District { id: "12", name: "Quận Hoàng Mai" },
    District { id: "10", name: "Quận Long Biên" },
    District { id: "4", name: "Quận Tây Hồ" },
    District { id: "7", name: "Quận Thanh Xuân" },
    District { id: "11", name: "Quận Hà Đông" },
    District { id: "9", name: "Quận Nam Từ Liêm" },
    District { id: "17", name: "Quận Bắc Từ Liêm" },
    District { id: "38", name: "Huyện Thanh Trì" },
    District { id: "47", name: "Huyện Hoài Đức" },
    District { id: "36", name: "Huyện Thạch Thất" },
    District { id: "48", name: "Huyện Gia Lâm" },
    District { id: "40", name: "Huyện Sóc Sơn" },
    District { id: "45", name: "Huyện Mê Linh" },
    District { id: "35", name: "Huyện Đan Phượng" },
    District { id: "53", name: "Huyện Ba Vì" },
    District { id: "34", name: "Huyện Đông Anh" },
    District { id: "1", name: "Thị xã Sơn Tây" },
    District { id: "44", name: "Huyện Mỹ Đức" },
    District { id: "42", name: "Huyện Phúc Thọ" },
    District { id: "37", name: "Huyện Thường Tín" },
    District { id: "51", name: "Huyện Chương Mỹ" },
    District { id: "41", name: "Huyện Quốc Oai" },
    District { id: "33", name: "Huyện Ứng Hòa" },
    District { id: "39", name: "Huyện Thanh Oai" },
];

impl CityKey {
    pub fn districts(&self) -> &'static [District] {
        match self {
            CityKey::Hcm => HCM_DISTRICTS,
            CityKey::Hanoi => HANOI_DISTRICTS,
        }
    }
}

/// Districts selectable under a city scope; all districts when no city is set.
pub fn districts_in_scope(city: Option<CityKey>) -> Vec<District> {
    match city {
        Some(city) => city.districts().to_vec(),
        None => {
            let mut all = HCM_DISTRICTS.to_vec();
            all.extend_from_slice(HANOI_DISTRICTS);
            all
        }
    }
}

pub fn district_in_scope(city: Option<CityKey>, district_id: &str) -> bool {
    match city {
        Some(city) => city.districts().iter().any(|d| d.id == district_id),
        None => {
            HCM_DISTRICTS.iter().any(|d| d.id == district_id)
                || HANOI_DISTRICTS.iter().any(|d| d.id == district_id)
        }
    }
}

pub fn district_name(district_id: &str) -> Option<&'static str> {
    districts_in_scope(None)
        .iter()
        .find(|d| d.id == district_id)
        .map(|d| d.name)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_city_param_round_trip() {
        for city in CityKey::ALL {
            assert_eq!(CityKey::from_param(city.as_param()), Some(*city));
        }
        assert_eq!(CityKey::from_param("0"), None);
        assert_eq!(CityKey::from_param("Seoul"), None);
    }

    #[test]
    fn test_district_tables_are_city_scoped() {
        assert!(district_in_scope(Some(CityKey::Hcm), "32"));
        assert!(!district_in_scope(Some(CityKey::Hanoi), "32"));
        assert!(district_in_scope(Some(CityKey::Hanoi), "20"));
        assert!(district_in_scope(None, "32"));
        assert!(district_in_scope(None, "20"));
        assert!(!district_in_scope(None, "999"));
    }

    #[test]
    fn test_district_ids_are_unique_across_cities() {
        let all = districts_in_scope(None);
        for (i, d) in all.iter().enumerate() {
            assert!(
                !all[i + 1..].iter().any(|other| other.id == d.id),
                "duplicate district id {}",
                d.id
            );
        }
    }

    #[test]
    fn test_district_name_lookup() {
        assert_eq!(district_name("32"), Some("Quận 1"));
        assert_eq!(district_name("20"), Some("Quận Ba Đình"));
        assert_eq!(district_name("999"), None);
    }
}
