use sheetwise_summarize::Workbook;

const QUARTERLY: &[u8] = include_bytes!("fixtures/quarterly.xlsx");

fn names(workbook: &Workbook) -> Vec<&str> {
    workbook.sheets().iter().map(|sheet| sheet.name()).collect()
}

#[test]
fn xlsx_sheets_keep_workbook_order() {
    let workbook = Workbook::parse(Some("quarterly.xlsx"), None, QUARTERLY).unwrap();

    assert_eq!(names(&workbook), ["Revenue", "Costs"]);
    let [revenue, costs] = workbook.sheets() else { panic!("expected two sheets") };
    assert_eq!((revenue.row_count(), revenue.column_count()), (3, 3));
    assert_eq!((costs.row_count(), costs.column_count()), (2, 2));
}

#[test]
fn xlsx_cells_are_display_text() {
    let workbook = Workbook::from_office(QUARTERLY).unwrap();
    let revenue = &workbook.sheets()[0];

    assert_eq!(revenue.rows()[0], ["month", "region", "revenue"]);
    assert_eq!(revenue.rows()[1], ["2024-01-01", "north", "1200"]);
    assert_eq!(revenue.rows()[2], ["2024-02-01", "south", "950.5"]);
    assert_eq!(workbook.sheets()[1].rows()[1], ["rent", "400"]);
}

#[test]
fn xlsx_is_detected_despite_a_generic_content_type() {
    let workbook = Workbook::parse(Some("quarterly.xlsx"), Some("text/plain"), QUARTERLY).unwrap();
    assert_eq!(names(&workbook), ["Revenue", "Costs"]);

    let unnamed = Workbook::parse(None, None, QUARTERLY).unwrap();
    assert_eq!(unnamed, workbook);
}

#[test]
fn rendered_prompt_lists_every_sheet() {
    let text = Workbook::from_office(QUARTERLY).unwrap().render(1);

    assert!(text.starts_with("## Sheet: Revenue (3 rows, 3 columns)\nmonth,region,revenue\n"));
    assert!(text.contains("... 2 more rows not shown"));
    assert!(text.contains("## Sheet: Costs (2 rows, 2 columns)\nitem,cost\n"));
}
