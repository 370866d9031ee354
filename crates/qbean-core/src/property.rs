//! PropertyType catalog
//!
//! Classifies a declared field type into one of a fixed set of property
//! categories, and knows for each category which declaration to generate and
//! which names that declaration needs imported.
//!
//! # Declarations
//!
//! `O` is the owner bean type: `QCountry` in a root bean, `R` in an
//! association bean.
//!
//! | Category | Example field | Declaration |
//! |----------|---------------|-------------|
//! | Scalar | `String name` | `PString<O>` |
//! | Scalar (array) | `@DbArray List<Integer> codes` | `PArray<O,Integer>` |
//! | Enum | `Status status` | `PEnum<O,Status>` |
//! | Temporal | `LocalDate born` | `PLocalDate<O>` |
//! | Association-to-one | `Country country` | `QAssocCountry<O>` |
//! | Association-to-many | `List<Order> orders` | `TQAssocMany<Order,O,QAssocOrder<O>>` |

use crate::entity::{EntitySource, FieldDescriptor, TypeKind};
use crate::names::{
    TQ_ASSOC_MANY, assoc_bean_full_name, assoc_bean_name, derive_short_name, support_type,
};
use crate::types::{BoxedScalar, TypeArg, TypeExpr, TypeRef};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// Resolved generation rule for one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    /// Single-valued scalar with a dedicated support type (`PString`, `PUuid`, ...).
    Scalar { support: &'static str },

    /// Collection of boxed scalars stored as a database array.
    Array { element: BoxedScalar },

    /// Enum-typed property; holds the enum's fully-qualified name.
    Enum { enum_type: String },

    /// Date/time property with a dedicated support type (`PLocalDate`, ...).
    Temporal { support: &'static str },

    /// Single-valued association; holds the target's fully-qualified name.
    AssocOne { target: String },

    /// Many-valued association; holds the target's fully-qualified name.
    AssocMany { target: String },
}

impl PropertyType {

    /// Declaration type for a field owned by the bean type `owner`.
    pub fn type_expr(&self, owner: &str) -> TypeExpr {
        match self {
            PropertyType::Scalar { support } | PropertyType::Temporal { support } => {
                TypeExpr::new(*support).with_name(owner)
            }
            PropertyType::Array { element } => TypeExpr::new("PArray")
                .with_name(owner)
                .with_arg(TypeArg::Boxed(*element)),
            PropertyType::Enum { enum_type } => TypeExpr::new("PEnum")
                .with_name(owner)
                .with_name(derive_short_name(enum_type)),
            PropertyType::AssocOne { target } => {
                TypeExpr::new(assoc_bean_name(derive_short_name(target))).with_name(owner)
            }
            PropertyType::AssocMany { target } => {
                let short_name = derive_short_name(target);
                let assoc = TypeExpr::new(assoc_bean_name(short_name)).with_name(owner);
                TypeExpr::new(derive_short_name(TQ_ASSOC_MANY))
                    .with_name(short_name)
                    .with_name(owner)
                    .with_arg(TypeArg::Expr(assoc))
            }
        }
    }

    /// Fully-qualified names the declaration requires.
    pub fn imports(&self) -> Vec<String> {
        match self {
            PropertyType::Scalar { support } | PropertyType::Temporal { support } => {
                vec![support_type(support)]
            }
            PropertyType::Array { element } => {
                vec![support_type("PArray"), element.java_name().to_string()]
            }
            PropertyType::Enum { enum_type } => vec![support_type("PEnum"), enum_type.clone()],
            PropertyType::AssocOne { target } => vec![assoc_bean_full_name(target)],
            PropertyType::AssocMany { target } => vec![
                TQ_ASSOC_MANY.to_string(),
                target.clone(),
                assoc_bean_full_name(target),
            ],
        }
    }
}

/// Why a field produced no property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Transient,
    Static,
    /// No generation rule for the declared type.
    Unsupported(String),
}

impl SkipReason {
    /// Whether the skip was asked for by the model author.
    pub fn is_intentional(&self) -> bool {
        matches!(self, SkipReason::Transient | SkipReason::Static)
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Transient => write!(f, "transient field"),
            SkipReason::Static => write!(f, "static field"),
            SkipReason::Unsupported(ty) => write!(f, "no query property type for {ty}"),
        }
    }
}

/// Outcome of classifying one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    Property(PropertyType),
    Skip(SkipReason),
}

/// Fixed table of recognized types.
#[derive(Debug, Clone)]
pub struct PropertyTypeCatalog {
    scalars: BTreeMap<&'static str, &'static str>,
    temporals: BTreeMap<&'static str, &'static str>,
    collections: BTreeSet<&'static str>,
}

const SCALARS: &[(&str, &str)] = &[
    ("java.math.BigDecimal", "PBigDecimal"),
    ("java.math.BigInteger", "PBigInteger"),
    ("java.util.UUID", "PUuid"),
    ("java.util.Locale", "PLocale"),
    ("java.util.Currency", "PCurrency"),
    ("java.net.URL", "PUrl"),
    ("java.net.URI", "PUri"),
];

const TEMPORALS: &[(&str, &str)] = &[
    ("java.time.LocalDate", "PLocalDate"),
    ("java.time.LocalDateTime", "PLocalDateTime"),
    ("java.time.LocalTime", "PLocalTime"),
    ("java.time.Instant", "PInstant"),
    ("java.time.OffsetDateTime", "POffsetDateTime"),
    ("java.time.ZonedDateTime", "PZonedDateTime"),
    ("java.time.Year", "PYear"),
    ("java.time.YearMonth", "PYearMonth"),
    ("java.util.Date", "PUtilDate"),
    ("java.util.Calendar", "PCalendar"),
    ("java.sql.Date", "PSqlDate"),
    ("java.sql.Timestamp", "PTimestamp"),
];

const COLLECTIONS: &[&str] = &[
    "java.util.Collection",
    "java.util.List",
    "java.util.Set",
    "java.util.SortedSet",
    "java.util.Map",
    "kotlin.collections.List",
    "kotlin.collections.MutableList",
    "kotlin.collections.Set",
    "kotlin.collections.MutableSet",
    "kotlin.collections.Map",
    "kotlin.collections.MutableMap",
];

impl PropertyTypeCatalog {
    pub fn new() -> Self {
        Self {
            scalars: SCALARS.iter().copied().collect(),
            temporals: TEMPORALS.iter().copied().collect(),
            collections: COLLECTIONS.iter().copied().collect(),
        }
    }

    /// Classify a field, or say why it has no property.
    pub fn classify(&self, field: &FieldDescriptor, source: &dyn EntitySource) -> Classification {
        if field.transient {
            return Classification::Skip(SkipReason::Transient);
        }
        if field.is_static {
            return Classification::Skip(SkipReason::Static);
        }

        let ty = &field.ty;
        let resolved = if ty.is_array() {
            None
        } else if self.collections.contains(ty.name.as_str()) {
            self.classify_collection(ty, field.db_array, source)
        } else {
            self.classify_single(ty, source)
        };

        match resolved {
            Some(property_type) => Classification::Property(property_type),
            None => Classification::Skip(SkipReason::Unsupported(ty.to_string())),
        }
    }

    fn classify_single(&self, ty: &TypeRef, source: &dyn EntitySource) -> Option<PropertyType> {
        if let Some(kind) = source.type_kind(&ty.name) {
            return match kind {
                TypeKind::Entity | TypeKind::Embeddable => Some(PropertyType::AssocOne {
                    target: ty.name.clone(),
                }),
                TypeKind::Enum => Some(PropertyType::Enum {
                    enum_type: ty.name.clone(),
                }),
                TypeKind::MappedSuperclass => None,
            };
        }

        if let Some(scalar) = BoxedScalar::from_type_name(&ty.name) {
            return Some(PropertyType::Scalar {
                support: boxed_support(scalar),
            });
        }
        if let Some(&support) = self.scalars.get(ty.name.as_str()) {
            return Some(PropertyType::Scalar { support });
        }
        self.temporals
            .get(ty.name.as_str())
            .map(|&support| PropertyType::Temporal { support })
    }

    fn classify_collection(
        &self,
        ty: &TypeRef,
        db_array: bool,
        source: &dyn EntitySource,
    ) -> Option<PropertyType> {
        // Map<K, V> is classified by its value type
        let element = ty.args.last()?;
        if element.is_array() {
            return None;
        }

        match source.type_kind(&element.name) {
            Some(TypeKind::Entity | TypeKind::Embeddable) => Some(PropertyType::AssocMany {
                target: element.name.clone(),
            }),
            Some(_) => None,
            None if db_array => BoxedScalar::from_type_name(&element.name)
                .map(|element| PropertyType::Array { element }),
            None => None,
        }
    }
}

impl Default for PropertyTypeCatalog {
    fn default() -> Self {
        Self::new()
    }
}

fn boxed_support(scalar: BoxedScalar) -> &'static str {
    match scalar {
        BoxedScalar::String => "PString",
        BoxedScalar::Integer => "PInteger",
        BoxedScalar::Long => "PLong",
        BoxedScalar::Double => "PDouble",
        BoxedScalar::Float => "PFloat",
        BoxedScalar::Short => "PShort",
        BoxedScalar::Boolean => "PBoolean",
        BoxedScalar::Byte => "PByte",
        BoxedScalar::Character => "PCharacter",
    }
}


#[cfg(test)]
#[path = "property/property_parameterized_tests.rs"]
mod property_parameterized_tests;
