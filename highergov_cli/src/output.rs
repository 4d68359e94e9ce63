use anyhow::{bail, Result};
use clap::ValueEnum;
use highergov_lib::normalize::{
    Agency, Awardee, Contract, Document, Grant, NaicsCode, Opportunity, Person, PscCode, Vehicle,
};
use highergov_lib::{Lookup, Page, Record};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

#[derive(Tabled, Serialize)]
pub struct OpportunityRow {
    #[tabled(rename = "Captured")]
    #[serde(rename = "Captured")]
    captured: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "NAICS")]
    #[serde(rename = "NAICS")]
    naics: String,
    #[tabled(rename = "Set-Aside")]
    #[serde(rename = "Set-Aside")]
    set_aside: String,
    #[tabled(rename = "Due")]
    #[serde(rename = "Due")]
    due: String,
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
}

#[derive(Tabled, Serialize)]
pub struct ContractRow {
    #[tabled(rename = "Award ID")]
    #[serde(rename = "Award ID")]
    award_id: String,
    #[tabled(rename = "Awardee")]
    #[serde(rename = "Awardee")]
    awardee: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Obligated")]
    #[serde(rename = "Obligated")]
    obligated: String,
    #[tabled(rename = "Start")]
    #[serde(rename = "Start")]
    start: String,
    #[tabled(rename = "End")]
    #[serde(rename = "End")]
    end: String,
    #[tabled(rename = "NAICS")]
    #[serde(rename = "NAICS")]
    naics: String,
}

#[derive(Tabled, Serialize)]
pub struct GrantRow {
    #[tabled(rename = "Award ID")]
    #[serde(rename = "Award ID")]
    award_id: String,
    #[tabled(rename = "Awardee")]
    #[serde(rename = "Awardee")]
    awardee: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Obligated")]
    #[serde(rename = "Obligated")]
    obligated: String,
    #[tabled(rename = "CFDA")]
    #[serde(rename = "CFDA")]
    cfda: String,
    #[tabled(rename = "Start")]
    #[serde(rename = "Start")]
    start: String,
}

#[derive(Tabled, Serialize)]
pub struct AwardeeRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "UEI")]
    #[serde(rename = "UEI")]
    uei: String,
    #[tabled(rename = "CAGE")]
    #[serde(rename = "CAGE")]
    cage: String,
    #[tabled(rename = "Primary NAICS")]
    #[serde(rename = "Primary NAICS")]
    primary_naics: String,
    #[tabled(rename = "SBA Certified")]
    #[serde(rename = "SBA Certified")]
    sba: String,
    #[tabled(rename = "Self Certified")]
    #[serde(rename = "Self Certified")]
    self_certified: String,
}

#[derive(Tabled, Serialize)]
pub struct DocumentRow {
    #[tabled(rename = "File")]
    #[serde(rename = "File")]
    filename: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    file_type: String,
    #[tabled(rename = "Size")]
    #[serde(rename = "Size")]
    size: String,
    #[tabled(rename = "Expires In")]
    #[serde(rename = "Expires In")]
    expires_in: String,
    #[tabled(rename = "URL")]
    #[serde(rename = "URL")]
    url: String,
}

#[derive(Tabled, Serialize)]
pub struct AgencyRow {
    #[tabled(rename = "Key")]
    #[serde(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Abbrev")]
    #[serde(rename = "Abbrev")]
    abbreviation: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    agency_type: String,
    #[tabled(rename = "Parent")]
    #[serde(rename = "Parent")]
    parent: String,
}

#[derive(Tabled, Serialize)]
pub struct VehicleRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Type")]
    #[serde(rename = "Type")]
    vehicle_type: String,
    #[tabled(rename = "Ceiling")]
    #[serde(rename = "Ceiling")]
    ceiling: String,
    #[tabled(rename = "Ordering Ends")]
    #[serde(rename = "Ordering Ends")]
    ordering_end: String,
}

#[derive(Tabled, Serialize)]
pub struct PersonRow {
    #[tabled(rename = "Name")]
    #[serde(rename = "Name")]
    name: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
    #[tabled(rename = "Agency")]
    #[serde(rename = "Agency")]
    agency: String,
    #[tabled(rename = "Email")]
    #[serde(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    #[serde(rename = "Phone")]
    phone: String,
}

#[derive(Tabled, Serialize)]
pub struct CodeRow {
    #[tabled(rename = "Code")]
    #[serde(rename = "Code")]
    code: String,
    #[tabled(rename = "Title")]
    #[serde(rename = "Title")]
    title: String,
}

// -- Row builders --

pub fn build_opportunity_rows(opportunities: &[Opportunity]) -> Vec<OpportunityRow> {
    opportunities
        .iter()
        .map(|o| OpportunityRow {
            captured: text(&o.captured_date),
            title: text(&o.title),
            agency: text(&o.agency_abbreviation.clone().or_else(|| o.agency_name.clone())),
            naics: text(&o.naics_code),
            set_aside: text(&o.set_aside),
            due: text(&o.due_date),
            key: text(&o.opp_key),
        })
        .collect()
}

pub fn build_contract_rows(contracts: &[Contract]) -> Vec<ContractRow> {
    contracts
        .iter()
        .map(|c| ContractRow {
            award_id: text(&c.award_id),
            awardee: text(&c.awardee_name),
            agency: text(&c.agency_name),
            obligated: format_money(c.obligated_amount),
            start: text(&c.start_date),
            end: text(&c.end_date),
            naics: text(&c.naics_code),
        })
        .collect()
}

pub fn build_grant_rows(grants: &[Grant]) -> Vec<GrantRow> {
    grants
        .iter()
        .map(|g| GrantRow {
            award_id: text(&g.award_id),
            awardee: text(&g.awardee_name),
            agency: text(&g.agency_name),
            obligated: format_money(g.obligated_amount),
            cfda: text(&g.cfda_number),
            start: text(&g.start_date),
        })
        .collect()
}

pub fn build_awardee_rows(awardees: &[Awardee]) -> Vec<AwardeeRow> {
    awardees
        .iter()
        .map(|a| AwardeeRow {
            name: text(&a.clean_name.clone().or_else(|| a.legal_name.clone())),
            uei: text(&a.uei),
            cage: text(&a.cage_code),
            primary_naics: text(&a.primary_naics),
            sba: a.sba_certifications.join(", "),
            self_certified: a.self_certifications.join(", "),
        })
        .collect()
}

pub fn build_document_rows(documents: &[Document]) -> Vec<DocumentRow> {
    documents
        .iter()
        .map(|d| DocumentRow {
            filename: text(&d.filename),
            file_type: text(&d.file_type),
            size: d.file_size.map(format_bytes).unwrap_or_default(),
            expires_in: d.expires_in.to_string(),
            url: text(&d.download_url),
        })
        .collect()
}

pub fn build_agency_rows(agencies: &[Agency]) -> Vec<AgencyRow> {
    agencies
        .iter()
        .map(|a| AgencyRow {
            key: text(&a.agency_key),
            name: text(&a.name),
            abbreviation: text(&a.abbreviation),
            agency_type: text(&a.agency_type),
            parent: text(&a.parent_agency_name),
        })
        .collect()
}

pub fn build_vehicle_rows(vehicles: &[Vehicle]) -> Vec<VehicleRow> {
    vehicles
        .iter()
        .map(|v| VehicleRow {
            name: text(&v.name),
            agency: text(&v.agency_name),
            vehicle_type: text(&v.vehicle_type),
            ceiling: format_money(v.ceiling),
            ordering_end: text(&v.ordering_end_date),
        })
        .collect()
}

pub fn build_person_rows(people: &[Person]) -> Vec<PersonRow> {
    people
        .iter()
        .map(|p| PersonRow {
            name: text(&p.name),
            title: text(&p.title),
            agency: text(&p.agency_name),
            email: text(&p.email),
            phone: text(&p.phone),
        })
        .collect()
}

pub fn build_naics_rows(codes: &[NaicsCode]) -> Vec<CodeRow> {
    codes
        .iter()
        .map(|c| CodeRow {
            code: text(&c.naics_code),
            title: text(&c.title),
        })
        .collect()
}

pub fn build_psc_rows(codes: &[PscCode]) -> Vec<CodeRow> {
    codes
        .iter()
        .map(|c| CodeRow {
            code: text(&c.psc_code),
            title: text(&c.title),
        })
        .collect()
}

// -- Envelope output --

/// Prints a page in the chosen format with a summary line on stderr. A
/// rejected page is still printed as JSON, then reported as an error.
pub fn print_page<R, Row>(
    page: &Page<R>,
    format: &OutputFormat,
    build_rows: fn(&[R]) -> Vec<Row>,
) -> Result<()>
where
    R: Record,
    Row: Tabled + Serialize,
{
    if let Some(ref error) = page.error {
        if let OutputFormat::Json = format {
            print_json(page);
        }
        bail!("{}", error);
    }

    eprintln!(
        "Page {} ({} total {}, {} per page)",
        page.page,
        page.total_count,
        R::PLURAL,
        page.page_size
    );

    print_rows(page, &page.records, format, build_rows)
}

pub fn print_lookup<R, Row>(
    lookup: &Lookup<R>,
    format: &OutputFormat,
    build_rows: fn(&[R]) -> Vec<Row>,
) -> Result<()>
where
    R: Record,
    Row: Tabled + Serialize,
{
    if let Some(ref error) = lookup.error {
        if let OutputFormat::Json = format {
            print_json(lookup);
        }
        bail!("{}", error);
    }

    eprintln!("{} {}", lookup.records.len(), R::PLURAL);

    print_rows(lookup, &lookup.records, format, build_rows)
}

fn print_rows<E, R, Row>(
    envelope: &E,
    records: &[R],
    format: &OutputFormat,
    build_rows: fn(&[R]) -> Vec<Row>,
) -> Result<()>
where
    E: Serialize,
    Row: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => print_json(envelope),
        OutputFormat::Table => println!("{}", Table::new(build_rows(records))),
        OutputFormat::Markdown => {
            let mut table = Table::new(build_rows(records));
            table.with(Style::markdown());
            println!("{}", table);
        }
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in build_rows(records) {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn format_money(value: Option<f64>) -> String {
    let Some(value) = value else {
        return String::new();
    };
    if value >= 1_000_000_000.0 {
        format!("${:.1}B", value / 1_000_000_000.0)
    } else if value >= 1_000_000.0 {
        format!("${:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("${:.1}K", value / 1_000.0)
    } else {
        format!("${:.0}", value)
    }
}

fn format_bytes(size: i64) -> String {
    if size >= 1_048_576 {
        format!("{:.1} MB", size as f64 / 1_048_576.0)
    } else if size >= 1_024 {
        format!("{:.1} KB", size as f64 / 1_024.0)
    } else {
        format!("{} B", size)
    }
}

#[cfg(test)]
mod tests {
    use highergov_lib::highergov_api::types::{
        AgencyRecord, AwardeeRecord, ContractRecord, DocumentRecord, OpportunityRecord,
        PaginatedResponse,
    };
    use serde::de::DeserializeOwned;

    use super::*;

    fn load_fixture<T, R>(name: &str) -> Vec<R>
    where
        T: DeserializeOwned,
        R: From<T>,
    {
        let path = format!(
            "{}/../highergov_api/tests/fixtures/{}",
            env!("CARGO_MANIFEST_DIR"),
            name
        );
        let body = std::fs::read_to_string(path).unwrap();
        let resp: PaginatedResponse<T> = serde_json::from_str(&body).unwrap();
        resp.results.into_iter().map(R::from).collect()
    }

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    // -- Formatting helpers --

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Some(1_250_000.5)), "$1.3M");
        assert_eq!(format_money(Some(50_000.0)), "$50.0K");
        assert_eq!(format_money(Some(2_500_000_000.0)), "$2.5B");
        assert_eq!(format_money(Some(500.0)), "$500");
        assert_eq!(format_money(None), "");
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(48213), "47.1 KB");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(3_145_728), "3.0 MB");
    }

    // -- Row builders --

    #[test]
    fn test_build_opportunity_rows() {
        let opps: Vec<Opportunity> = load_fixture::<OpportunityRecord, _>("opportunities.json");
        let rows = build_opportunity_rows(&opps);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].captured, "2024-03-01");
        assert_eq!(rows[0].agency, "DON");
        assert_eq!(rows[0].naics, "541512");
        assert_eq!(rows[1].agency, "General Services Administration");
        assert_eq!(rows[1].set_aside, "");
    }

    #[test]
    fn test_build_contract_rows() {
        let contracts: Vec<Contract> = load_fixture::<ContractRecord, _>("contracts.json");
        let rows = build_contract_rows(&contracts);
        assert_eq!(rows[0].awardee, "Acme Federal");
        assert_eq!(rows[0].obligated, "$1.3M");
        assert_eq!(rows[1].awardee, "Legacy Corp");
        assert_eq!(rows[1].obligated, "");
    }

    #[test]
    fn test_build_awardee_rows() {
        let awardees: Vec<Awardee> = load_fixture::<AwardeeRecord, _>("awardees.json");
        let rows = build_awardee_rows(&awardees);
        assert_eq!(rows[0].name, "Acme Federal Solutions");
        assert_eq!(rows[0].sba, "HUBZone");
        assert_eq!(rows[0].self_certified, "WOSB");
    }

    #[test]
    fn test_build_document_rows() {
        let docs: Vec<Document> = load_fixture::<DocumentRecord, _>("documents.json");
        let rows = build_document_rows(&docs);
        assert_eq!(rows[0].expires_in, "60 minutes");
        assert_eq!(rows[0].size, "47.1 KB");
    }

    #[test]
    fn test_build_agency_rows() {
        let agencies: Vec<Agency> = load_fixture::<AgencyRecord, _>("agencies.json");
        let rows = build_agency_rows(&agencies);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].name, "Department of the Navy");
        assert_eq!(rows[1].parent, "Department of Defense");
    }

    #[test]
    fn test_build_rows_empty() {
        assert!(build_person_rows(&[]).is_empty());
        assert!(build_vehicle_rows(&[]).is_empty());
    }

    // -- CSV headers --

    #[test]
    fn test_csv_opportunity_headers() {
        let opps: Vec<Opportunity> = load_fixture::<OpportunityRecord, _>("opportunities.json");
        let csv = csv_from_rows(&build_opportunity_rows(&opps));
        let header = csv.lines().next().unwrap();
        assert_eq!(header, "Captured,Title,Agency,NAICS,Set-Aside,Due,Key");
    }

    #[test]
    fn test_csv_code_headers() {
        let codes = vec![NaicsCode {
            naics_code: Some("541512".into()),
            title: Some("Computer Systems Design Services".into()),
            description: None,
        }];
        let csv = csv_from_rows(&build_naics_rows(&codes));
        assert_eq!(
            csv,
            "Code,Title\n541512,Computer Systems Design Services\n"
        );
    }

    // -- Envelope handling --

    #[test]
    fn test_rejected_page_is_an_error() {
        let page: Page<Person> = Page::rejected(1, 25, "at least one of [contact_email, agency_key] is required to search people");
        let err = print_page(&page, &OutputFormat::Table, build_person_rows).unwrap_err();
        assert!(err.to_string().contains("contact_email"));
    }
}
