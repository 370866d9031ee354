#![allow(non_snake_case)]

use super::*;
use crate::entity::Model;
use test_case::test_case;

// ============================================================================
// Parameterized scalar support type mapping
// ============================================================================

#[test_case("java.lang.String", "PString")]
#[test_case("java.lang.Integer", "PInteger")]
#[test_case("int", "PInteger")]
#[test_case("java.lang.Long", "PLong")]
#[test_case("long", "PLong")]
#[test_case("java.lang.Double", "PDouble")]
#[test_case("float", "PFloat")]
#[test_case("short", "PShort")]
#[test_case("boolean", "PBoolean")]
#[test_case("java.lang.Byte", "PByte")]
#[test_case("char", "PCharacter")]
#[test_case("java.math.BigDecimal", "PBigDecimal")]
#[test_case("java.util.UUID", "PUuid")]
fn PropertyTypeCatalog___scalar___maps_to_support_type(descriptor: &str, expected: &'static str) {
    let field = FieldDescriptor::parse("value", descriptor).unwrap();

    let result = PropertyTypeCatalog::new().classify(&field, &Model::new());

    assert_eq!(
        result,
        Classification::Property(PropertyType::Scalar { support: expected })
    );
}

// ============================================================================
// Parameterized temporal support type mapping
// ============================================================================

#[test_case("java.time.LocalDate", "PLocalDate")]
#[test_case("java.time.LocalDateTime", "PLocalDateTime")]
#[test_case("java.time.Instant", "PInstant")]
#[test_case("java.time.OffsetDateTime", "POffsetDateTime")]
#[test_case("java.util.Date", "PUtilDate")]
#[test_case("java.sql.Timestamp", "PTimestamp")]
fn PropertyTypeCatalog___temporal___maps_to_support_type(descriptor: &str, expected: &'static str) {
    let field = FieldDescriptor::parse("when", descriptor).unwrap();

    let result = PropertyTypeCatalog::new().classify(&field, &Model::new());

    assert_eq!(
        result,
        Classification::Property(PropertyType::Temporal { support: expected })
    );
}

// ============================================================================
// Parameterized collection recognition
// ============================================================================

#[test_case("java.util.List<app.Order>")]
#[test_case("java.util.Set<app.Order>")]
#[test_case("java.util.Collection<app.Order>")]
#[test_case("java.util.Map<java.lang.Long, app.Order>")]
#[test_case("kotlin.collections.MutableList<app.Order>")]
fn PropertyTypeCatalog___collection_of_entity___is_assoc_many(descriptor: &str) {
    let mut model = Model::new();
    model
        .add_definition(crate::entity::EntityDefinition::entity("app.Order"))
        .unwrap();
    let field = FieldDescriptor::parse("orders", descriptor).unwrap();

    let result = PropertyTypeCatalog::new().classify(&field, &model);

    assert_eq!(
        result,
        Classification::Property(PropertyType::AssocMany {
            target: "app.Order".into()
        })
    );
}
