//! Wire-level tests of the organizations contract
//!
//! These tests exercise the shapes the way an HTTP client or server would:
//! through JSON payloads.

use std::collections::HashSet;

use chrono::{DateTime, TimeZone, Utc};
use contract_core::{wire, ContractError, Currency, HttpMethod, Location};
use contract_organizations::{
    CreateOrganizationEventTicketDto, Organization, OrganizationEndpoints,
    OrganizationEventTicketCategory, OrganizationEventTicketType, OrganizationIdentity,
    OrganizationMemberRole, OrganizationSocialLink, OrganizationSocialType,
};
use serde_json::json;

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().unwrap()
}

fn sample_ticket() -> CreateOrganizationEventTicketDto {
    CreateOrganizationEventTicketDto {
        id: "tkt_001".into(),
        name: "General admission".into(),
        description: Some("Standing area".into()),
        price: 25.5,
        quantity: 100,
        kind: OrganizationEventTicketType::Paid,
        category: OrganizationEventTicketCategory::Standard,
        currency: Currency::Eur,
        is_visible: true,
        is_fees_included: false,
        start_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        end_at: Utc.with_ymd_and_hms(2024, 1, 2, 0, 0, 0).unwrap(),
    }
}

fn organization_payload() -> serde_json::Value {
    json!({
        "id": "org_1",
        "slug": "acme-events",
        "identity": {
            "name": "Acme Events",
            "description": "Concerts and festivals",
            "metadata": {
                "followersCount": 12,
                "eventsCount": 0,
                "viewsCount": 340,
                "membersCount": 0
            },
            "socialLinks": [
                { "type": "instagram", "url": "https://instagram.test/acme" },
                { "type": "website", "url": "https://acme.test" }
            ]
        },
        "members": [],
        "events": [],
        "savedTickets": [],
        "verified": true,
        "updatedAt": "2024-03-01T12:00:00Z",
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

// ============================================================================
// Enumerations
// ============================================================================

#[test]
fn social_types_use_lowercase_tokens() {
    let expected: HashSet<&str> = [
        "facebook",
        "twitter",
        "instagram",
        "linkedin",
        "youtube",
        "website",
    ]
    .into_iter()
    .collect();

    for kind in OrganizationSocialType::all() {
        let encoded = serde_json::to_value(kind).unwrap();
        let token = encoded.as_str().unwrap();
        assert!(expected.contains(token), "unexpected token {token}");

        let decoded: OrganizationSocialType = serde_json::from_value(encoded.clone()).unwrap();
        assert_eq!(decoded, *kind);
    }
    assert_eq!(OrganizationSocialType::all().len(), expected.len());
}

#[test]
fn unknown_social_type_is_rejected() {
    let err = wire::decode::<OrganizationSocialType>("\"tiktok\"").unwrap_err();
    assert_eq!(
        err,
        ContractError::unknown_value("OrganizationSocialType", "tiktok")
    );
    assert_eq!(err.error_code(), "UNKNOWN_ENUM_VALUE");
}

#[test]
fn unknown_social_type_is_reported_verbatim() {
    let payload = r#"{"type":"foo at line 9","url":"https://example.com"}"#;
    let err = wire::decode::<OrganizationSocialLink>(payload).unwrap_err();
    assert_eq!(
        err,
        ContractError::unknown_value("OrganizationSocialType", "foo at line 9")
    );

    let payload = json!({ "type": "fo`o", "url": "https://example.com" });
    let err = wire::decode_value::<OrganizationSocialLink>(payload).unwrap_err();
    assert_eq!(
        err,
        ContractError::unknown_value("OrganizationSocialType", "fo`o")
    );
}

#[test]
fn member_roles_are_ranked_by_ordinal() {
    for role in OrganizationMemberRole::all() {
        assert!(role.ordinal() <= 3);
        let encoded = wire::encode(role).unwrap();
        assert_eq!(encoded, role.ordinal().to_string());
    }

    assert!(OrganizationMemberRole::Owner > OrganizationMemberRole::Administrator);
    assert!(OrganizationMemberRole::Administrator > OrganizationMemberRole::Manager);
    assert!(OrganizationMemberRole::Manager > OrganizationMemberRole::Employee);
}

#[test]
fn out_of_range_role_is_rejected() {
    let err = wire::decode::<OrganizationMemberRole>("4").unwrap_err();
    assert_eq!(
        err,
        ContractError::unknown_value("OrganizationMemberRole", 4)
    );

    let err = wire::decode::<OrganizationMemberRole>("18446744073709551615").unwrap_err();
    assert_eq!(
        err,
        ContractError::unknown_value("OrganizationMemberRole", u64::MAX)
    );
    assert_eq!(err.error_code(), "UNKNOWN_ENUM_VALUE");
}

// ============================================================================
// Ticket creation payload
// ============================================================================

#[test]
fn ticket_dto_round_trips() {
    let ticket = sample_ticket();
    let json = wire::encode(&ticket).unwrap();
    let back: CreateOrganizationEventTicketDto = wire::decode(&json).unwrap();

    assert_eq!(back, ticket);
    assert!(back.validate().is_ok());
}

#[test]
fn ticket_dto_wire_names() {
    let json = wire::encode_value(&sample_ticket()).unwrap();

    assert_eq!(json["startAt"], "2024-01-01T00:00:00Z");
    assert_eq!(json["endAt"], "2024-01-02T00:00:00Z");
    assert_eq!(json["price"], 25.5);
    assert_eq!(json["quantity"], 100);
    assert_eq!(json["type"], "paid");
    assert_eq!(json["isVisible"], true);
    assert_eq!(json["isFeesIncluded"], false);
}

#[test]
fn ticket_dto_without_description() {
    let mut payload = wire::encode_value(&sample_ticket()).unwrap();
    payload.as_object_mut().unwrap().remove("description");

    let ticket: CreateOrganizationEventTicketDto = wire::decode_value(payload).unwrap();
    assert!(ticket.description.is_none());
}

#[test]
fn ticket_dto_missing_required_field() {
    let mut payload = wire::encode_value(&sample_ticket()).unwrap();
    payload.as_object_mut().unwrap().remove("currency");

    let err = wire::decode_value::<CreateOrganizationEventTicketDto>(payload).unwrap_err();
    assert_eq!(err, ContractError::MissingRequiredField("currency".into()));
}

#[test]
fn ticket_dto_invalid_ranges() {
    let mut inverted = sample_ticket();
    std::mem::swap(&mut inverted.start_at, &mut inverted.end_at);
    assert!(matches!(
        inverted.validate(),
        Err(ContractError::InvalidRange(_))
    ));

    let mut negative = sample_ticket();
    negative.price = -0.5;
    assert!(matches!(
        negative.validate(),
        Err(ContractError::InvalidRange(_))
    ));
}

#[test]
fn ticket_dto_non_finite_price_is_not_encoded() {
    let mut ticket = sample_ticket();
    ticket.price = f64::NAN;

    let err = wire::encode(&ticket).unwrap_err();
    assert!(matches!(err, ContractError::InvalidRange(_)));
    assert_eq!(err.status_code(), 422);
}

// ============================================================================
// Organization resource
// ============================================================================

#[test]
fn organization_with_empty_collections_round_trips() {
    let org: Organization = wire::decode_value(organization_payload()).unwrap();

    assert!(org.members.is_empty());
    assert!(org.events.is_empty());
    assert!(org.saved_tickets.is_empty());
    assert!(org.location.is_none());

    let encoded = wire::encode_value(&org).unwrap();
    assert_eq!(encoded["members"], json!([]));
    assert_eq!(encoded["events"], json!([]));
    assert_eq!(encoded["savedTickets"], json!([]));
    assert!(encoded.get("location").is_none());

    let back: Organization = wire::decode_value(encoded).unwrap();
    assert_eq!(back, org);
}

#[test]
fn organization_identity_fields() {
    let org: Organization = wire::decode_value(organization_payload()).unwrap();

    assert_eq!(org.identity.profile.name, "Acme Events");
    assert_eq!(org.identity.metadata().profile.followers_count, 12);
    assert_eq!(org.identity.metadata().views_count, 340);
    assert_eq!(
        org.identity.social_link(OrganizationSocialType::Website),
        Some(&OrganizationSocialLink::new(
            OrganizationSocialType::Website,
            "https://acme.test"
        ))
    );
    assert!(org.identity.has_unique_social_types());
    assert!(org.counters_consistent());
    assert!(org.validate().is_ok());
    assert_eq!(org.created_at, ts("2024-01-01T00:00:00Z"));
}

#[test]
fn organization_null_collection_is_rejected() {
    let mut payload = organization_payload();
    payload["members"] = serde_json::Value::Null;

    let err = wire::decode_value::<Organization>(payload).unwrap_err();
    assert!(matches!(err, ContractError::TypeMismatch(_)));
}

#[test]
fn organization_with_location() {
    let mut org = Organization::new("acme", OrganizationIdentity::new("Acme"));
    org.location = Some(Location::new("Main St 1", "Berlin", "DE", 52.52, 13.405));

    let back: Organization = wire::decode(&wire::encode(&org).unwrap()).unwrap();
    assert_eq!(back.location, org.location);
}

#[test]
fn organization_missing_slug() {
    let mut payload = organization_payload();
    payload.as_object_mut().unwrap().remove("slug");

    let err = wire::decode_value::<Organization>(payload).unwrap_err();
    assert_eq!(err, ContractError::MissingRequiredField("slug".into()));
}

// ============================================================================
// Endpoint catalog
// ============================================================================

#[test]
fn endpoint_catalog_matches_table() {
    let expected = [
        (HttpMethod::Get, "/organizations", "Organization[]", None),
        (HttpMethod::Get, "/organizations/:id", "Organization", None),
        (
            HttpMethod::Post,
            "/organizations",
            "Organization",
            Some("CreateOrganizationDto"),
        ),
        (
            HttpMethod::Put,
            "/organizations/:id",
            "Organization",
            Some("UpdateOrganizationDto"),
        ),
        (HttpMethod::Delete, "/organizations/:id", "boolean", None),
    ];

    let signatures = OrganizationEndpoints::signatures();
    assert_eq!(signatures.len(), 5);

    for (sig, (method, path, response, body)) in signatures.iter().zip(expected) {
        assert_eq!(sig.method, method);
        assert_eq!(sig.path, path);
        assert_eq!(sig.response, response);
        assert_eq!(sig.body, body);
    }

    let keys: HashSet<_> = signatures.iter().map(|sig| sig.key()).collect();
    assert_eq!(keys.len(), 5);
}

#[test]
fn endpoint_paths_render() {
    let get = OrganizationEndpoints::Get.signature();
    assert_eq!(
        get.render(&[("id", "org_1")]).unwrap(),
        "/organizations/org_1"
    );
    assert_eq!(
        get.render(&[]).unwrap_err(),
        ContractError::MissingPathParam("id".into())
    );

    let list = OrganizationEndpoints::List.signature();
    assert_eq!(list.render(&[]).unwrap(), "/organizations");
}
