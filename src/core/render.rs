//! planilla 表單的 HTML 頁面
//!
//! 來自使用者或遠端服務的值，寫入頁面前一律經過 [`escape_html`]

use crate::domain::model::{ResultField, ResultRecord, SubmittedForm};
use std::fmt::Write;

const HEAD: &str = r#"<!doctype html><html lang="es"><head><meta charset="utf-8"><title>SOI - Pago Planilla</title>
<meta name="viewport" content="width=device-width, initial-scale=1">
<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css" rel="stylesheet">
<style>body{background:#f7f8fa}.card{border-radius:14px}.row-item{padding:10px 0;border-bottom:1px solid #eee}.row-item:last-child{border-bottom:0}.lbl{color:#6b7280}.val{font-weight:600}.money{color:#13795b}</style>
</head><body><div class="container py-4"><div class="row justify-content-center"><div class="col-lg-9">
"#;

const FOOT: &str = "</div></div></div></body></html>\n";

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// 產生完整頁面：表單、錯誤訊息、結果表格
pub fn render_page(form: &SubmittedForm, errors: &[String], result: Option<&ResultRecord>) -> String {
    let mut html = String::with_capacity(4096);
    html.push_str(HEAD);
    render_form(&mut html, form);

    if !errors.is_empty() {
        render_errors(&mut html, errors);
    }

    if let Some(record) = result {
        render_result(&mut html, record);
    }

    html.push_str(FOOT);
    html
}

fn render_form(html: &mut String, form: &SubmittedForm) {
    // write! 到 String 不會失敗
    let _ = write!(
        html,
        concat!(
            r#"<div class="card shadow-sm mb-4"><div class="card-body"><form method="post" class="row g-3">"#,
            "\n",
            r#"<div class="col-md-6"><label class="form-label">Correo</label><input type="email" name="correo" class="form-control" required value="{}"></div>"#,
            "\n",
            r#"<div class="col-md-6"><label class="form-label">Número de Planilla</label><input type="text" name="planilla" class="form-control" required value="{}"></div>"#,
            "\n",
            r#"<div class="col-12 text-end"><button class="btn btn-primary">Buscar</button></div></form></div></div>"#,
            "\n",
        ),
        escape_html(&form.correo),
        escape_html(&form.planilla),
    );
}

fn render_errors(html: &mut String, errors: &[String]) {
    html.push_str(r#"<div class="alert alert-danger">"#);
    for error in errors {
        let _ = write!(html, "<div>• {}</div>", escape_html(error));
    }
    html.push_str("</div>\n");
}

fn render_result(html: &mut String, record: &ResultRecord) {
    html.push_str(
        r#"<div class="card shadow-sm"><div class="card-body"><h2 class="h5 mb-3">Resultado de la Búsqueda</h2>"#,
    );
    html.push('\n');

    for field in ResultField::ALL {
        let class = if field.is_money() { " money" } else { "" };
        let _ = writeln!(
            html,
            r#"<div class="row row-item"><div class="col-md-6 lbl">{}</div><div class="col-md-6 text-md-end val{}" data-field="{}">{}</div></div>"#,
            field.label(),
            class,
            field.key(),
            escape_html(record.resolve(field)),
        );
    }

    html.push_str("</div></div>\n");
}
