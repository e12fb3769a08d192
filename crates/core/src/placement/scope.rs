//! Scope registry: the bounded ordering domains that take part in placement.
//!
//! A [`Scope`] is a kind plus an optional partition key. Every placement
//! operation is parameterised by an explicit scope so each ordering is
//! checked and repaired on its own.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::types::DbId;

use super::PlacementError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Number of positions in the homepage category grid.
pub const HOMEPAGE_CATEGORY_SLOTS: u32 = 8;

/// Maximum number of links a single menu section may hold.
pub const MENU_LINK_LIMIT: u32 = 3;

// ---------------------------------------------------------------------------
// Kinds and variants
// ---------------------------------------------------------------------------

/// Entity kinds that carry a display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScopeKind {
    HeroSlide,
    FeaturedItem,
    HomepageCategorySlot,
    MenuSection,
    MenuLink,
}

impl ScopeKind {
    pub const ALL: [ScopeKind; 5] = [
        ScopeKind::HeroSlide,
        ScopeKind::FeaturedItem,
        ScopeKind::HomepageCategorySlot,
        ScopeKind::MenuSection,
        ScopeKind::MenuLink,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ScopeKind::HeroSlide => "hero-slide",
            ScopeKind::FeaturedItem => "featured-item",
            ScopeKind::HomepageCategorySlot => "homepage-category-slot",
            ScopeKind::MenuSection => "menu-section",
            ScopeKind::MenuLink => "menu-link",
        }
    }
}

impl fmt::Display for ScopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScopeKind {
    type Err = PlacementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScopeKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| PlacementError::Validation(format!("unknown placement kind '{s}'")))
    }
}

/// Partition key for kinds that keep several independent orderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Large featured-showcase entries.
    Feature,
    /// Small featured-showcase tiles.
    Tile,
    /// Links belonging to one menu section.
    Section(DbId),
}

impl Variant {
    /// Parse the featured-item variants as stored in the `variant` column.
    pub fn parse_featured(s: &str) -> Result<Self, PlacementError> {
        match s {
            "feature" => Ok(Variant::Feature),
            "tile" => Ok(Variant::Tile),
            other => Err(PlacementError::Validation(format!(
                "featured variant must be 'feature' or 'tile', got '{other}'"
            ))),
        }
    }

    fn fits(self, kind: ScopeKind) -> bool {
        matches!(
            (kind, self),
            (ScopeKind::FeaturedItem, Variant::Feature | Variant::Tile)
                | (ScopeKind::MenuLink, Variant::Section(_))
        )
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Feature => f.write_str("feature"),
            Variant::Tile => f.write_str("tile"),
            Variant::Section(id) => write!(f, "section-{id}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Descriptor lookup
// ---------------------------------------------------------------------------

/// Static shape of a scope kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScopeDescriptor {
    /// Maximum number of entities, or `None` when unbounded.
    pub max_slots: Option<u32>,
    /// Whether the kind is split into independent orderings by [`Variant`].
    pub partitioned: bool,
}

/// Look up the cardinality limit and partitioning of a kind.
pub const fn describe(kind: ScopeKind) -> ScopeDescriptor {
    match kind {
        ScopeKind::HeroSlide | ScopeKind::MenuSection => ScopeDescriptor {
            max_slots: None,
            partitioned: false,
        },
        ScopeKind::FeaturedItem => ScopeDescriptor {
            max_slots: None,
            partitioned: true,
        },
        ScopeKind::HomepageCategorySlot => ScopeDescriptor {
            max_slots: Some(HOMEPAGE_CATEGORY_SLOTS),
            partitioned: false,
        },
        ScopeKind::MenuLink => ScopeDescriptor {
            max_slots: Some(MENU_LINK_LIMIT),
            partitioned: true,
        },
    }
}

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// One independent ordering domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Scope {
    kind: ScopeKind,
    variant: Option<Variant>,
}

impl Scope {
    /// Build a scope, checking that the variant matches the kind's partitioning.
    pub fn new(kind: ScopeKind, variant: Option<Variant>) -> Result<Self, PlacementError> {
        let descriptor = describe(kind);
        match (descriptor.partitioned, variant) {
            (true, None) => Err(PlacementError::Validation(format!(
                "{kind} placements require a variant"
            ))),
            (false, Some(v)) => Err(PlacementError::Validation(format!(
                "{kind} placements are not partitioned, got variant '{v}'"
            ))),
            (true, Some(v)) if !v.fits(kind) => Err(PlacementError::Validation(format!(
                "variant '{v}' does not apply to {kind}"
            ))),
            _ => Ok(Self { kind, variant }),
        }
    }

    pub fn hero_slides() -> Self {
        Self {
            kind: ScopeKind::HeroSlide,
            variant: None,
        }
    }

    pub fn featured(variant: Variant) -> Result<Self, PlacementError> {
        Self::new(ScopeKind::FeaturedItem, Some(variant))
    }

    pub fn homepage_slots() -> Self {
        Self {
            kind: ScopeKind::HomepageCategorySlot,
            variant: None,
        }
    }

    pub fn menu_sections() -> Self {
        Self {
            kind: ScopeKind::MenuSection,
            variant: None,
        }
    }

    pub fn menu_links(section_id: DbId) -> Self {
        Self {
            kind: ScopeKind::MenuLink,
            variant: Some(Variant::Section(section_id)),
        }
    }

    pub fn kind(&self) -> ScopeKind {
        self.kind
    }

    pub fn variant(&self) -> Option<Variant> {
        self.variant
    }

    pub fn descriptor(&self) -> ScopeDescriptor {
        describe(self.kind)
    }

    pub fn max_slots(&self) -> Option<u32> {
        self.descriptor().max_slots
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.variant {
            Some(v) => write!(f, "{}/{v}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn homepage_grid_is_bounded() {
        let d = describe(ScopeKind::HomepageCategorySlot);
        assert_eq!(d.max_slots, Some(HOMEPAGE_CATEGORY_SLOTS));
        assert!(!d.partitioned);
    }

    #[test]
    fn menu_links_are_capped_at_three_per_section() {
        let d = describe(ScopeKind::MenuLink);
        assert_eq!(d.max_slots, Some(3));
        assert!(d.partitioned);
    }

    #[test]
    fn hero_slides_are_unbounded() {
        assert_eq!(Scope::hero_slides().max_slots(), None);
    }

    #[test]
    fn parses_kebab_case_kinds() {
        for kind in ScopeKind::ALL {
            assert_eq!(kind.as_str().parse::<ScopeKind>().unwrap(), kind);
        }
    }

    #[test]
    fn rejects_unknown_kind() {
        assert_matches!(
            "banner".parse::<ScopeKind>(),
            Err(PlacementError::Validation(_))
        );
    }

    #[test]
    fn partitioned_kind_requires_variant() {
        assert_matches!(
            Scope::new(ScopeKind::FeaturedItem, None),
            Err(PlacementError::Validation(_))
        );
    }

    #[test]
    fn unpartitioned_kind_rejects_variant() {
        assert_matches!(
            Scope::new(ScopeKind::HeroSlide, Some(Variant::Tile)),
            Err(PlacementError::Validation(_))
        );
    }

    #[test]
    fn section_variant_only_fits_menu_links() {
        assert!(Scope::new(ScopeKind::FeaturedItem, Some(Variant::Section(1))).is_err());
        assert!(Scope::new(ScopeKind::MenuLink, Some(Variant::Tile)).is_err());
        assert_eq!(
            Scope::new(ScopeKind::MenuLink, Some(Variant::Section(4))).unwrap(),
            Scope::menu_links(4)
        );
    }

    #[test]
    fn featured_variants_are_distinct_scopes() {
        let feature = Scope::featured(Variant::Feature).unwrap();
        let tile = Scope::featured(Variant::Tile).unwrap();
        assert_ne!(feature, tile);
        assert_eq!(tile.to_string(), "featured-item/tile");
    }

    #[test]
    fn parse_featured_variant() {
        assert_eq!(Variant::parse_featured("tile").unwrap(), Variant::Tile);
        assert!(Variant::parse_featured("hero").is_err());
    }
}
