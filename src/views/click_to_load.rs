use super::Fragment;
use crate::models::RowPage;

/// Table rows for one page followed by the "Load more" row
#[derive(Debug, Clone)]
pub struct ClickToLoadRows {
    pub page: RowPage,
}

/// Initial table wrapping the first page of rows
#[derive(Debug, Clone, Copy, Default)]
pub struct ClickToLoadTable;

impl Fragment for ClickToLoadRows {
    fn render(&self) -> String {
        let mut html = String::new();
        for id in &self.page.rows {
            html.push_str(&format!(
                "<tr><td>{id}</td><td>Row {id}</td></tr>\n",
                id = id
            ));
        }
        html.push_str(&format!(
            r##"<tr id="replaceMe"><td colspan="2"><button hx-get="/click_to_load?page={next}" hx-target="#replaceMe" hx-swap="outerHTML" class="btn">Load more</button></td></tr>"##,
            next = self.page.next_page
        ));
        html
    }
}

impl Fragment for ClickToLoadTable {
    fn render(&self) -> String {
        format!(
            r#"<table class="table-auto">
<thead><tr><th>ID</th><th>Name</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>"#,
            rows = ClickToLoadRows {
                page: RowPage::first()
            }
            .render()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_and_next_control() {
        let html = ClickToLoadRows {
            page: RowPage {
                rows: vec![7, 8],
                next_page: 4,
            },
        }
        .render();
        assert!(html.contains("<td>7</td>"));
        assert!(html.contains("<td>8</td>"));
        assert!(!html.contains("<td>9</td>"));
        assert!(html.contains("/click_to_load?page=4"));
    }

    #[test]
    fn test_table_starts_at_first_page() {
        let html = ClickToLoadTable.render();
        assert!(html.contains("<td>1</td>"));
        assert!(html.contains("<td>2</td>"));
        assert!(html.contains("/click_to_load?page=1"));
    }
}
