//! Test fixtures: reusable profile content.

use profilecard::LocalFile;

/// A published profile with every section filled in
pub const FULL_PROFILE: &str = r##"{
  "mainHeading": "Let's work together",
  "subHeading": "Portraits and brand shoots",
  "fullName": "Ana Lima",
  "jobTitle": "Photographer",
  "bio": "Natural light portraits in Lisbon.",
  "email": "ana@example.com",
  "phone": "+351 555 0101",
  "coverPhotoUrl": "https://cdn.example/cover.jpg",
  "avatarUrl": "https://cdn.example/avatar.jpg",
  "workImages": [
    {"url": "https://cdn.example/w1.jpg"},
    {"url": "https://cdn.example/w2.jpg"}
  ],
  "services": [{"name": "Portrait session", "price": "$150"}],
  "reviews": [{"name": "Jamie", "text": "Stunning photos", "rating": 5}],
  "socialLinks": {"instagram": "https://ig.example/ana"},
  "templateId": "template-1",
  "sectionOrder": ["main", "about", "work", "services", "reviews", "contact"],
  "visibility": {
    "showMain": true, "showAbout": true, "showWork": true,
    "showServices": true, "showReviews": true, "showContact": true
  },
  "pageTheme": "dark",
  "font": "Inter",
  "buttonBgColor": "#111827",
  "buttonTextColor": "white",
  "textAlignment": "center"
}"##;

/// A profile loaded from old data: stale preview URLs, a broken section
/// order, an out-of-range rating and a paid template
pub const LEGACY_PROFILE: &str = r#"{
  "fullName": "Ana Lima",
  "bio": "",
  "services": [],
  "coverPhotoUrl": "blob:http://localhost:3000/5c1f",
  "workImages": [
    {"url": "blob:http://localhost:3000/aa01"},
    {"url": "https://cdn.example/w1.jpg"}
  ],
  "reviews": [{"name": "A", "text": "Great", "rating": 9}],
  "templateId": "template-3",
  "sectionOrder": ["reviews", "main", "bogus"]
}"#;

pub fn jpeg(name: &str) -> LocalFile {
    LocalFile::new(name, "image/jpeg", name.as_bytes().to_vec())
}

pub fn pdf(name: &str) -> LocalFile {
    LocalFile::new(name, "application/pdf", name.as_bytes().to_vec())
}
