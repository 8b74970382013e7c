use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
}

impl Difficulty {
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
        }
    }
}

// favorite status is not stored on the record; it is looked up in the favorites set at render time
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub id: u32,
    pub text: &'static str,
    pub difficulty: Difficulty,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Temple {
    pub temple_name: &'static str,
    pub location: &'static str,
    /// Free-text date, usually "YYYY, Month, D".
    pub dedicated: &'static str,
    /// Square feet.
    pub area: u64,
    pub image_url: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
}

pub const TIPS: &[Tip] = &[
    Tip {
        id: 1,
        text: "Do 10 push-ups",
        difficulty: Difficulty::Beginner,
    },
    Tip {
        id: 2,
        text: "Walk briskly for 20 minutes",
        difficulty: Difficulty::Beginner,
    },
    Tip {
        id: 3,
        text: "Do 3 sets of squats (12 reps)",
        difficulty: Difficulty::Intermediate,
    },
    Tip {
        id: 4,
        text: "Stretch for 5 minutes after waking",
        difficulty: Difficulty::Beginner,
    },
    Tip {
        id: 5,
        text: "Try a short HIIT: 15s on / 15s off x 8",
        difficulty: Difficulty::Intermediate,
    },
];

pub const TEMPLES: &[Temple] = &[
    Temple {
        temple_name: "Aba Nigeria",
        location: "Aba, Nigeria",
        dedicated: "2005, August, 7",
        area: 11500,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/aba-nigeria/400x250/aba-nigeria-temple-lds-273999-wallpaper.jpg"
        ),
    },
    Temple {
        temple_name: "Manti Utah",
        location: "Manti, Utah, United States",
        dedicated: "1888, May, 21",
        area: 74792,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/manti-utah/400x250/manti-temple-768192-wallpaper.jpg"
        ),
    },
    Temple {
        temple_name: "Payson Utah",
        location: "Payson, Utah, United States",
        dedicated: "2015, June, 7",
        area: 96630,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/payson-utah/400x225/payson-utah-temple-exterior-1416671-wallpaper.jpg"
        ),
    },
    Temple {
        temple_name: "Yigo Guam",
        location: "Yigo, Guam",
        dedicated: "2020, May, 2",
        area: 6861,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/yigo-guam/400x250/yigo_guam_temple_2.jpg"
        ),
    },
    Temple {
        temple_name: "Washington D.C.",
        location: "Kensington, Maryland, United States",
        dedicated: "1974, November, 19",
        area: 156558,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/washington-dc/400x250/washington_dc_temple-exterior-2.jpeg"
        ),
    },
    Temple {
        temple_name: "Lima Perú",
        location: "Lima, Perú",
        dedicated: "1986, January, 10",
        area: 9600,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/lima-peru/400x250/lima-peru-temple-evening-1075606-wallpaper.jpg"
        ),
    },
    Temple {
        temple_name: "Mexico City Mexico",
        location: "Mexico City, Mexico",
        dedicated: "1983, December, 2",
        area: 116642,
        image_url: concat!(
            "https://content.churchofjesuschrist.org/templesldsorg/bc/Temples/photo-galleries",
            "/mexico-city-mexico/400x250/mexico-city-temple-exterior-1518361-wallpaper.jpg"
        ),
    },
    Temple {
        temple_name: "Salt Lake (Assembly Hall nearby) - Salt Lake City",
        location: "Salt Lake City, Utah, United States",
        dedicated: "1893, April, 6",
        area: 253000,
        image_url: "images/temple.jpg",
    },
    Temple {
        temple_name: "Tokyo Japan",
        location: "Tokyo, Japan",
        dedicated: "1980, October, 27",
        area: 17650,
        image_url: "images/temple.jpg",
    },
    Temple {
        temple_name: "Accra Ghana",
        location: "Accra, Ghana",
        dedicated: "2004, July, 9",
        area: 10200,
        image_url: "images/temple.jpg",
    },
];

pub const PRODUCTS: &[Product] = &[
    Product {
        id: "prd-001",
        name: "MaxiFit Oversized Tee - Classic",
    },
    Product {
        id: "prd-002",
        name: "MaxiFit Oversized Tee - Performance",
    },
    Product {
        id: "prd-003",
        name: "MaxiFit Hoodie - Lightweight",
    },
    Product {
        id: "prd-004",
        name: "MaxiFit Tank - Breathable",
    },
    Product {
        id: "prd-005",
        name: "MaxiFit Compression Shorts",
    },
];

pub fn find_tip(id: u32) -> Option<&'static Tip> {
    TIPS.iter().find(|t| t.id == id)
}

/// Resolves a product id to its display name, falling back to the raw id.
pub fn product_name(id: &str) -> &str {
    PRODUCTS
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.name)
        .unwrap_or(id)
}
