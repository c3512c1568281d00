use ojdata_sheet::{read_worksheet, SheetError, DEFAULT_WORKSHEET};

fn doc(worksheet: &str, table_body: &str) -> Vec<u8> {
    format!(
        r#"<?xml version="1.0"?>
<Workbook xmlns="urn:schemas-microsoft-com:office:spreadsheet"
          xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
  <Worksheet ss:Name="{worksheet}">
    <Table>
{table_body}
    </Table>
  </Worksheet>
</Workbook>"#
    )
    .into_bytes()
}

#[test]
fn reads_dense_rows_in_order() {
    let xml = doc(
        DEFAULT_WORKSHEET,
        r#"<Row><Cell><Data ss:Type="String">#</Data></Cell>
                <Cell><Data ss:Type="String">Tempo[s]</Data></Cell></Row>
           <Row><Cell><Data ss:Type="String">evt</Data></Cell>
                <Cell><Data ss:Type="Number">1,5</Data></Cell></Row>"#,
    );

    let table = read_worksheet(&xml, DEFAULT_WORKSHEET).unwrap();
    assert_eq!(table.row_count(), 2);
    assert_eq!(
        table.rows()[0],
        vec![Some("#".to_string()), Some("Tempo[s]".to_string())]
    );
    assert_eq!(
        table.rows()[1],
        vec![Some("evt".to_string()), Some("1,5".to_string())]
    );
}

#[test]
fn sparse_indices_fill_gaps_with_none() {
    let xml = doc(
        DEFAULT_WORKSHEET,
        r#"<Row><Cell><Data>a</Data></Cell>
                <Cell ss:Index="4"><Data>d</Data></Cell>
                <Cell><Data>e</Data></Cell></Row>"#,
    );

    let table = read_worksheet(&xml, DEFAULT_WORKSHEET).unwrap();
    assert_eq!(
        table.rows()[0],
        vec![
            Some("a".to_string()),
            None,
            None,
            Some("d".to_string()),
            Some("e".to_string())
        ]
    );
}

#[test]
fn self_closing_cells_occupy_a_position() {
    let xml = doc(
        DEFAULT_WORKSHEET,
        r#"<Row><Cell/><Cell><Data>b</Data></Cell></Row>"#,
    );

    let table = read_worksheet(&xml, DEFAULT_WORKSHEET).unwrap();
    assert_eq!(table.rows()[0], vec![None, Some("b".to_string())]);
}

#[test]
fn prefixed_element_names_parse_identically() {
    let xml = br#"<?xml version="1.0"?>
<ss:Workbook xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
  <ss:Worksheet ss:Name="Dati OJ">
    <ss:Table>
      <ss:Row><ss:Cell ss:Index="2"><ss:Data>x</ss:Data></ss:Cell></ss:Row>
    </ss:Table>
  </ss:Worksheet>
</ss:Workbook>"#;

    let table = read_worksheet(xml, DEFAULT_WORKSHEET).unwrap();
    assert_eq!(table.rows()[0], vec![None, Some("x".to_string())]);
}

#[test]
fn escaped_text_is_unescaped() {
    let xml = doc(DEFAULT_WORKSHEET, r#"<Row><Cell><Data>a &amp; b</Data></Cell></Row>"#);

    let table = read_worksheet(&xml, DEFAULT_WORKSHEET).unwrap();
    assert_eq!(table.rows()[0], vec![Some("a & b".to_string())]);
}

#[test]
fn other_worksheets_are_ignored() {
    let xml = br#"<?xml version="1.0"?>
<Workbook xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
  <Worksheet ss:Name="Riepilogo">
    <Table><Row><Cell><Data>skip me</Data></Cell></Row></Table>
  </Worksheet>
  <Worksheet ss:Name="Dati OJ">
    <Table><Row><Cell><Data>keep me</Data></Cell></Row></Table>
  </Worksheet>
</Workbook>"#;

    let table = read_worksheet(xml, DEFAULT_WORKSHEET).unwrap();
    assert_eq!(table.row_count(), 1);
    assert_eq!(table.rows()[0], vec![Some("keep me".to_string())]);
}

#[test]
fn missing_worksheet_is_a_typed_error() {
    let xml = doc("Altro", r#"<Row><Cell><Data>a</Data></Cell></Row>"#);

    match read_worksheet(&xml, DEFAULT_WORKSHEET) {
        Err(SheetError::MissingWorksheet { name }) => assert_eq!(name, DEFAULT_WORKSHEET),
        other => panic!("expected MissingWorksheet, got {other:?}"),
    }
}

#[test]
fn worksheet_without_table_is_a_typed_error() {
    let xml = br#"<?xml version="1.0"?>
<Workbook xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
  <Worksheet ss:Name="Dati OJ"></Worksheet>
</Workbook>"#;

    match read_worksheet(xml, DEFAULT_WORKSHEET) {
        Err(SheetError::MissingTable { name }) => assert_eq!(name, DEFAULT_WORKSHEET),
        other => panic!("expected MissingTable, got {other:?}"),
    }
}

#[test]
fn malformed_document_is_an_xml_error() {
    let xml = br#"<?xml version="1.0"?>
<Workbook xmlns:ss="urn:schemas-microsoft-com:office:spreadsheet">
  <Worksheet ss:Name="Dati OJ">
    <Table><Row><Cell><Data>a</Datum></Cell></Row></Table>
  </Worksheet>
</Workbook>"#;

    assert!(matches!(
        read_worksheet(xml, DEFAULT_WORKSHEET),
        Err(SheetError::Xml(_))
    ));
}
