//! End-to-end pipeline runs against a local mock server.

#![allow(clippy::unwrap_used)]

use chemscrape::process::{process_catalogue, process_kegg, KeggOutputs, KeggSummary};
use chemscrape::request::Fetcher;
use chemscrape::sites::{CompoundListing, Iolitec, Proionic, ProductRecord};
use chemscrape::table::ResultTable;
use chemscrape::Error;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount(server: &MockServer, path_str: &str, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(path_str))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

fn ok(body: impl Into<String>) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body.into())
}

fn compound_ids(n: usize) -> Vec<String> {
    (1..=n).map(|i| format!("C{i}")).collect()
}

fn entry_body(batch: &[String]) -> String {
    batch.iter().map(|id| format!("ENTRY       {id}\n///\n")).collect()
}

fn mol_body(batch: &[String]) -> String {
    batch.iter().map(|id| format!("{id}\n  M  END\n$$$$\n")).collect()
}

#[tokio::test]
async fn kegg_pipeline_lists_and_streams_batches_in_order() {
    let server = MockServer::start().await;
    let ids = compound_ids(23);

    let list = ids
        .iter()
        .map(|id| format!("{id}\tcompound {id}\n"))
        .collect::<String>();
    mount(&server, "/list/cpd", ok(list)).await;

    let mut expected_entries = String::new();
    let mut expected_mol = String::new();
    for batch in ids.chunks(10) {
        let joined = batch.join("+");
        mount(&server, &format!("/get/{joined}"), ok(entry_body(batch))).await;
        mount(&server, &format!("/get/{joined}/mol"), ok(mol_body(batch))).await;
        expected_entries.push_str(&entry_body(batch));
        expected_mol.push_str(&mol_body(batch));
    }

    let dir = TempDir::new().unwrap();
    let outputs = KeggOutputs::in_dir(dir.path().join("data"));
    let api = chemscrape::sites::KeggApi::new(server.uri());

    let summary = process_kegg(&api, &Fetcher::new(), &outputs).await.unwrap();
    assert_eq!(
        summary,
        KeggSummary {
            compounds: 23,
            batches: 3
        }
    );

    let listed = ResultTable::<CompoundListing>::read_tsv(&outputs.list).await.unwrap();
    let listed_ids = listed.into_iter().map(|c| c.kegg_id).collect::<Vec<_>>();
    assert_eq!(listed_ids, ids);

    assert_eq!(std::fs::read_to_string(&outputs.entries).unwrap(), expected_entries);
    assert_eq!(std::fs::read_to_string(&outputs.mol).unwrap(), expected_mol);
}

#[tokio::test]
async fn kegg_pipeline_stops_at_first_failed_batch() {
    let server = MockServer::start().await;
    let ids = compound_ids(15);

    let list = ids.iter().map(|id| format!("{id}\tx\n")).collect::<String>();
    mount(&server, "/list/cpd", ok(list)).await;

    let first = &ids[..10];
    mount(&server, &format!("/get/{}", first.join("+")), ok(entry_body(first))).await;
    mount(
        &server,
        &format!("/get/{}", ids[10..].join("+")),
        ResponseTemplate::new(503),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let outputs = KeggOutputs::in_dir(dir.path());
    let api = chemscrape::sites::KeggApi::new(server.uri());

    let err = process_kegg(&api, &Fetcher::new(), &outputs).await.unwrap_err();
    assert!(matches!(err, Error::Network { ref url, .. } if url.ends_with("/get/C11+C12+C13+C14+C15")));

    // Partial output stays behind, later stages never start.
    assert_eq!(std::fs::read_to_string(&outputs.entries).unwrap(), entry_body(first));
    assert!(!outputs.mol.exists());
}

#[tokio::test]
async fn kegg_pipeline_fails_when_list_is_unavailable() {
    let server = MockServer::start().await;
    mount(&server, "/list/cpd", ResponseTemplate::new(500)).await;

    let dir = TempDir::new().unwrap();
    let outputs = KeggOutputs::in_dir(dir.path());
    let api = chemscrape::sites::KeggApi::new(server.uri());

    let err = process_kegg(&api, &Fetcher::new(), &outputs).await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert!(!outputs.list.exists());
}

#[tokio::test]
async fn kegg_pipeline_with_empty_list_writes_header_only() {
    let server = MockServer::start().await;
    mount(&server, "/list/cpd", ok("")).await;

    let dir = TempDir::new().unwrap();
    let outputs = KeggOutputs::in_dir(dir.path());
    let api = chemscrape::sites::KeggApi::new(server.uri());

    let summary = process_kegg(&api, &Fetcher::new(), &outputs).await.unwrap();
    assert_eq!(summary.batches, 0);
    assert_eq!(std::fs::read_to_string(&outputs.list).unwrap(), "kegg_id\tname\n");
    assert_eq!(std::fs::read_to_string(&outputs.entries).unwrap(), "");
    assert_eq!(std::fs::read_to_string(&outputs.mol).unwrap(), "");
}

const IOLITEC_LIST: &str = r#"<html><body>
    <div class="product"><a href="/index.php/products/il-0001" rel="bookmark">IL-0001</a></div>
    <div class="product"><a href="/index.php/downloads/sheet.pdf">sheet</a></div>
    <div class="product"><a href="/index.php/products/il-0002" rel="bookmark">IL-0002</a></div>
</body></html>"#;

const IOLITEC_FULL: &str = r#"<html><body>
    <h1>1-Butyl-3-methylimidazolium chloride, 99%</h1>
    <div class="detail-fields-box"><ul>
      <li><div class="field-label">Produkt Nr.:</div> IL-0001</li>
      <li><div class="field-label">CAS Nr.:</div><div>[79917-90-1]</div></li>
    </ul></div>
</body></html>"#;

const IOLITEC_NO_CAS: &str = r#"<html><body>
    <h1>X</h1>
    <div class="detail-fields-box"><ul>
      <li><div class="field-label">Produkt Nr.:</div> IL-0002</li>
    </ul></div>
</body></html>"#;

#[tokio::test]
async fn iolitec_pipeline_writes_records_in_link_order() {
    let server = MockServer::start().await;
    mount(&server, "/index.php/products/list", ok(IOLITEC_LIST)).await;
    mount(&server, "/index.php/products/il-0001", ok(IOLITEC_FULL)).await;
    mount(&server, "/index.php/products/il-0002", ok(IOLITEC_NO_CAS)).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("data").join("iolitec-raw.tsv");
    let site = Iolitec::new(server.uri());

    let table = process_catalogue(&site, &Fetcher::new(), &output).await.unwrap();

    let expected = vec![
        ProductRecord {
            name: Some("1-Butyl-3-methylimidazolium chloride, 99%".into()),
            cas: Some("79917-90-1".into()),
            url: format!("{}/index.php/products/il-0001", server.uri()),
        },
        ProductRecord {
            name: Some("X".into()),
            cas: None,
            url: format!("{}/index.php/products/il-0002", server.uri()),
        },
    ];
    assert_eq!(table.rows(), expected.as_slice());

    let written = ResultTable::<ProductRecord>::read_tsv(&output).await.unwrap();
    assert_eq!(written, table);

    let text = std::fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("name\tcas\turl\n"));
    assert!(text.contains(&format!("X\t\t{}/index.php/products/il-0002\n", server.uri())));
}

#[tokio::test]
async fn proionic_pipeline_aborts_on_failed_product_page() {
    let server = MockServer::start().await;
    let list = r#"<a href="/bestseller/emim-cl">EMIM Cl</a><a href="/bestseller/gone">gone</a>"#;
    mount(&server, "/ionic-liquids/webshop.php", ok(list)).await;
    mount(
        &server,
        "/bestseller/emim-cl",
        ok(r#"<div class="name"><span>Name:</span><span>EMIM Cl</span></div>"#),
    )
    .await;
    mount(&server, "/bestseller/gone", ResponseTemplate::new(404)).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("proionic-raw.tsv");
    let site = Proionic::new(server.uri());

    let err = process_catalogue(&site, &Fetcher::new(), &output).await.unwrap_err();
    match err {
        Error::Network { url, source } => {
            assert_eq!(url, format!("{}/bestseller/gone", server.uri()));
            assert_eq!(source.status().map(|s| s.as_u16()), Some(404));
        }
        other => panic!("expected network error, got {other:?}"),
    }
    assert!(!output.exists());
}

#[tokio::test]
async fn proionic_pipeline_with_no_products_writes_header_only() {
    let server = MockServer::start().await;
    mount(&server, "/ionic-liquids/webshop.php", ok("<p>closed</p>")).await;

    let dir = TempDir::new().unwrap();
    let output = dir.path().join("proionic-raw.tsv");

    let table = process_catalogue(&Proionic::new(server.uri()), &Fetcher::new(), &output)
        .await
        .unwrap();
    assert!(table.is_empty());
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "name\tcas\turl\n");
}
