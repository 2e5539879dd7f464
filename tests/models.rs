use estatelist::models::{
    Bhk, ChannelPartner, Company, EntityRef, Financing, Lead, LeadDraft, LeadSource, LeadStatus, LeadType,
    PartnerType, Purpose,
};

#[test]
fn test_lead_decodes_backend_json() {
    let json = r#"{
        "_id": "64f1c0ffee",
        "leadType": "channel_partner",
        "date": "2024-03-05T00:00:00.000Z",
        "fullName": "Asha Patel",
        "phone": "9876543210",
        "email": "asha@example.com",
        "purpose": "Buy",
        "budget": "75L",
        "bhk": "4+",
        "leadSource": "Walk In",
        "leadStatus": "Site Visit",
        "financing": "Self",
        "company": { "_id": "c1", "name": "Acme Homes" },
        "channelPartner": "p1"
    }"#;

    let lead: Lead = serde_json::from_str(json).unwrap();
    assert_eq!(lead.id, "64f1c0ffee");
    assert_eq!(lead.lead_type, LeadType::ChannelPartner);
    assert_eq!(lead.full_name, "Asha Patel");
    assert_eq!(lead.purpose, Some(Purpose::Buy));
    assert_eq!(lead.bhk, Some(Bhk::FourPlus));
    assert_eq!(lead.lead_source, Some(LeadSource::WalkIn));
    assert_eq!(lead.lead_status, LeadStatus::SiteVisit);
    assert_eq!(lead.financing, Some(Financing::SelfFunded));

    let company = lead.company.as_ref().unwrap();
    assert_eq!(company.id(), "c1");
    assert_eq!(company.display_name(), Some("Acme Homes"));

    let partner = lead.channel_partner.as_ref().unwrap();
    assert_eq!(partner.id(), "p1");
    assert_eq!(partner.display_name(), None);
}

#[test]
fn test_lead_tolerates_sparse_records() {
    // Old records carry empty strings where nothing was picked
    let json = r#"{
        "_id": "l1",
        "fullName": "Vikram",
        "phone": "9876543210",
        "email": "",
        "purpose": "",
        "bhk": "",
        "company": "",
        "channelPartner": null
    }"#;

    let lead: Lead = serde_json::from_str(json).unwrap();
    assert_eq!(lead.lead_type, LeadType::MyLead); // default
    assert_eq!(lead.lead_status, LeadStatus::New); // default
    assert_eq!(lead.email, None);
    assert_eq!(lead.purpose, None);
    assert_eq!(lead.bhk, None);
    assert_eq!(lead.company, None);
    assert_eq!(lead.channel_partner, None);
    assert_eq!(lead.date, None);
}

#[test]
fn test_status_wire_strings_round_trip() {
    for status in LeadStatus::ALL {
        let encoded = serde_json::to_string(&status).unwrap();
        let decoded: LeadStatus = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, status);
    }
    // Multi-word variants use their display spelling on the wire
    assert_eq!(serde_json::to_string(&LeadStatus::SiteVisit).unwrap(), "\"Site Visit\"");
    assert_eq!(serde_json::to_string(&LeadStatus::OfferMade).unwrap(), "\"Offer Made\"");
    assert_eq!(serde_json::to_string(&Financing::HomeLoan).unwrap(), "\"Home Loan\"");
    assert_eq!(serde_json::to_string(&LeadType::MyLead).unwrap(), "\"my_lead\"");
}

#[test]
fn test_entity_ref_embedded_partner_uses_full_name() {
    let json = r#"{ "_id": "p9", "fullName": "Ravi Kumar" }"#;
    let reference: EntityRef = serde_json::from_str(json).unwrap();
    assert_eq!(reference.id(), "p9");
    assert_eq!(reference.display_name(), Some("Ravi Kumar"));
}

#[test]
fn test_edit_draft_round_trips_an_unchanged_record() {
    let json = r#"{
        "_id": "l7",
        "leadType": "my_lead",
        "date": "2024-03-05T00:00:00.000Z",
        "fullName": "Meena Iyer",
        "phone": "9123456780",
        "purpose": "Rent",
        "leadStatus": "Contacted",
        "company": { "_id": "c2", "name": "Nest Estates" }
    }"#;
    let lead: Lead = serde_json::from_str(json).unwrap();

    let draft = LeadDraft::from_lead(&lead);
    assert_eq!(draft.date, "2024-03-05");
    assert_eq!(draft.company_id, "c2"); // reference unwrapped to its identity
    assert_eq!(draft.channel_partner_id, "");

    // Submitting untouched reproduces the record's values
    let payload = serde_json::to_value(draft.to_payload()).unwrap();
    assert_eq!(payload["fullName"], "Meena Iyer");
    assert_eq!(payload["phone"], "9123456780");
    assert_eq!(payload["purpose"], "Rent");
    assert_eq!(payload["leadStatus"], "Contacted");
    assert_eq!(payload["company"], "c2");
    assert_eq!(payload["date"], "2024-03-05T00:00:00.000Z");
}

#[test]
fn test_payload_blanks_partner_for_direct_leads() {
    let draft = LeadDraft {
        lead_type: LeadType::MyLead,
        full_name: "Asha".into(),
        phone: "9876543210".into(),
        purpose: Some(Purpose::Buy),
        company_id: "c1".into(),
        channel_partner_id: "p1".into(), // leftover from a type switch
        ..LeadDraft::default()
    };

    let payload = serde_json::to_value(draft.to_payload()).unwrap();
    let object = payload.as_object().unwrap();
    assert!(!object.contains_key("channelPartner"));

    let draft = LeadDraft {
        lead_type: LeadType::ChannelPartner,
        ..draft
    };
    let payload = serde_json::to_value(draft.to_payload()).unwrap();
    assert_eq!(payload["channelPartner"], "p1");
}

#[test]
fn test_payload_omits_unset_optionals() {
    let draft = LeadDraft {
        date: "2024-03-05".into(),
        full_name: "Asha".into(),
        phone: "9876543210".into(),
        purpose: Some(Purpose::Buy),
        company_id: "c1".into(),
        ..LeadDraft::default()
    };

    let payload = serde_json::to_value(draft.to_payload()).unwrap();
    let object = payload.as_object().unwrap();
    assert!(!object.contains_key("email"));
    assert!(!object.contains_key("budget"));
    assert!(!object.contains_key("bhk"));
    assert!(!object.contains_key("leadSource"));
    assert!(!object.contains_key("financing"));
    assert_eq!(payload["date"], "2024-03-05T00:00:00.000Z");
    assert_eq!(payload["leadType"], "my_lead");
}

#[test]
fn test_company_decodes_with_mongo_id() {
    let json = r#"{
        "_id": "c3",
        "name": "Urban Nest",
        "phone": "9000000000",
        "email": "",
        "website": "https://urbannest.example"
    }"#;
    let company: Company = serde_json::from_str(json).unwrap();
    assert_eq!(company.id, "c3");
    assert_eq!(company.email, None);
    assert_eq!(company.website.as_deref(), Some("https://urbannest.example"));
    assert_eq!(company.address, None);
}

#[test]
fn test_partner_decodes_with_type() {
    let json = r#"{
        "_id": "p2",
        "fullName": "Sunita Rao",
        "phone": "9888877766",
        "agencyName": "Skyline Realty",
        "reraNumber": "RERA98765",
        "partnerType": "Broker"
    }"#;
    let partner: ChannelPartner = serde_json::from_str(json).unwrap();
    assert_eq!(partner.id, "p2");
    assert_eq!(partner.agency_name, "Skyline Realty");
    assert_eq!(partner.partner_type, Some(PartnerType::Broker));
}
