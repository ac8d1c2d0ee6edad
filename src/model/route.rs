use crate::error::{Error, Result};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    Home,
    AllListings,
    ListingDetail(String),
    Staging,
    Testimonials,
    OurTeam,
    NotFound(String),
}

/// Sections on the home page that nav links can scroll to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    Listings,
    Team,
    Contact,
}

impl Anchor {
    pub fn from_hash(hash: &str) -> Option<Self> {
        match hash.trim_start_matches('#') {
            "listings" => Some(Self::Listings),
            "team" => Some(Self::Team),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn hash(&self) -> &'static str {
        match self {
            Self::Listings => "#listings",
            Self::Team => "#team",
            Self::Contact => "#contact",
        }
    }
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let path_only = trimmed.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path_only.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["all-listings"] | ["listings"] => Self::AllListings,
            ["listing", id] => Self::ListingDetail((*id).to_string()),
            ["staging"] => Self::Staging,
            ["testimonials"] => Self::Testimonials,
            ["our-team"] => Self::OurTeam,
            _ => Self::NotFound(trimmed.to_string()),
        }
    }

    /// Like `parse`, but unknown paths are an error instead of `NotFound`.
    pub fn parse_strict(path: &str) -> Result<Self> {
        match Self::parse(path) {
            Self::NotFound(p) => Err(Error::InvalidRoute(p)),
            route => Ok(route),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::AllListings => "/all-listings".to_string(),
            Self::ListingDetail(id) => format!("/listing/{id}"),
            Self::Staging => "/staging".to_string(),
            Self::Testimonials => "/testimonials".to_string(),
            Self::OurTeam => "/our-team".to_string(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Self::Home => "Home",
            Self::AllListings => "Listings",
            Self::ListingDetail(_) => "Listing",
            Self::Staging => "Staging",
            Self::Testimonials => "Testimonials",
            Self::OurTeam => "Our Team",
            Self::NotFound(_) => "Not Found",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Where a navigation link points.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavTarget {
    Route(Route),
    Anchor(Anchor),
}

impl NavTarget {
    pub fn from_href(href: &str) -> Option<Self> {
        if href.starts_with('#') {
            Anchor::from_hash(href).map(Self::Anchor)
        } else {
            Some(Self::Route(Route::parse(href)))
        }
    }
}

pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
    pub number: &'static str,
}

/// Slide-out menu entries.
pub const MENU_ITEMS: &[NavItem] = &[
    NavItem { label: "Listings", href: "/all-listings", number: "01" },
    NavItem { label: "Our Team", href: "/our-team", number: "02" },
    NavItem { label: "Testimonials", href: "/testimonials", number: "05" },
    NavItem { label: "Staging Before & After", href: "/staging", number: "06" },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_paths() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/all-listings"), Route::AllListings);
        assert_eq!(Route::parse("/listings/"), Route::AllListings);
        assert_eq!(
            Route::parse("/listing/65f0c2?ref=home"),
            Route::ListingDetail("65f0c2".into())
        );
        assert_eq!(Route::parse("/our-team"), Route::OurTeam);
        assert_eq!(Route::parse("/staging#top"), Route::Staging);
    }

    #[test]
    fn test_unknown_path_is_not_found() {
        assert_eq!(
            Route::parse("/admin/login"),
            Route::NotFound("/admin/login".into())
        );
        assert!(matches!(
            Route::parse_strict("/nope"),
            Err(Error::InvalidRoute(_))
        ));
    }

    #[test]
    fn test_path_round_trips() {
        for route in [
            Route::Home,
            Route::AllListings,
            Route::ListingDetail("abc".into()),
            Route::Staging,
            Route::Testimonials,
            Route::OurTeam,
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[test]
    fn test_nav_target_from_href() {
        assert_eq!(
            NavTarget::from_href("#contact"),
            Some(NavTarget::Anchor(Anchor::Contact))
        );
        assert_eq!(NavTarget::from_href("#nowhere"), None);
        assert_eq!(
            NavTarget::from_href("/staging"),
            Some(NavTarget::Route(Route::Staging))
        );
    }
}
