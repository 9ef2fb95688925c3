//! HTML consultation page
//!
//! Single page: persona radio group, message textarea, submit button, a
//! loading indicator shown while a submission is in flight, and the outcome.

use std::fmt::Write as _;

use sodan::{AdviceResponse, Persona, PersonaId};

pub const EMPTY_INPUT_WARNING: &str = "まずは相談内容を入力してください。";
pub const FAILURE_NOTICE: &str =
    "回答の生成に失敗しました。時間をおいてから、もう一度お試しください。";

/// What to show below the form
#[derive(Debug, Clone, Copy)]
pub enum PageOutcome<'a> {
    Idle,
    Answer(&'a AdviceResponse),
    EmptyInput,
    Failed,
}

/// Everything the page needs to render
#[derive(Debug, Clone, Copy)]
pub struct PageView<'a> {
    pub personas: &'a [Persona],
    pub selected: &'a PersonaId,
    pub message: &'a str,
    pub outcome: PageOutcome<'a>,
}

const STYLE: &str = r#"
body { font-family: sans-serif; max-width: 760px; margin: 2rem auto; padding: 0 1rem; color: #222; }
fieldset { border: none; padding: 0; margin: 1rem 0; }
textarea { width: 100%; height: 200px; font-size: 1rem; }
button { margin-top: .75rem; padding: .5rem 1.25rem; font-size: 1rem; }
button:disabled { opacity: .5; }
.loading { display: none; margin-top: .75rem; color: #555; }
form.in-flight .loading { display: block; }
.warning { background: #fff4ce; border-left: 4px solid #e0a800; padding: .75rem; }
.error { background: #fde7e9; border-left: 4px solid #d13438; padding: .75rem; }
.answer { white-space: pre-wrap; line-height: 1.6; }
"#;

const SCRIPT: &str = r#"
document.getElementById("consult").addEventListener("submit", function (e) {
  if (this.classList.contains("in-flight")) { e.preventDefault(); return; }
  this.classList.add("in-flight");
  this.querySelector("button").disabled = true;
});
"#;

/// Render the full page
pub fn render_page(view: &PageView<'_>) -> String {
    let mut html = String::with_capacity(4096);

    html.push_str("<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>🤖 Sodan - LLM相談アプリ</title>\n");
    let _ = writeln!(html, "<style>{}</style>\n</head>\n<body>", STYLE);

    html.push_str("<h1>🤖 Sodan - LLM相談アプリ</h1>\n");
    html.push_str(
        "<h3>📄 アプリの概要</h3>\n\
         <p>入力したテキストを LLM に渡し、選択した「専門家」の立場からアドバイスを返してもらうことができます。</p>\n\
         <h3>✅ 使い方</h3>\n\
         <ol>\n\
         <li>まず「どんな専門家に相談するか」をラジオボタンから選びます</li>\n\
         <li>下のテキスト入力欄に、相談したい内容や質問を書きます</li>\n\
         <li>「LLMに相談する」ボタンを押すと、LLMからの回答が画面に表示されます</li>\n\
         </ol>\n",
    );

    html.push_str("<form id=\"consult\" method=\"post\" action=\"/\">\n");
    html.push_str("<fieldset>\n<legend>相談したい専門家の種類を選んでください：</legend>\n");
    for persona in view.personas {
        let id = escape_html(persona.id.as_str());
        let checked = if &persona.id == view.selected {
            " checked"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<label><input type=\"radio\" name=\"persona\" value=\"{id}\"{checked}> {}</label><br>",
            escape_html(&persona.label)
        );
    }
    html.push_str("</fieldset>\n");

    html.push_str("<label for=\"message\">ここに相談内容 / 質問を書いてください。</label>\n");
    let _ = writeln!(
        html,
        "<textarea id=\"message\" name=\"message\" \
         placeholder=\"例）40代からAIスキルを身につけるには、どんな勉強方法が良いですか？\">{}</textarea>",
        escape_html(view.message)
    );
    html.push_str("<button type=\"submit\">LLMに相談する</button>\n");
    html.push_str("<div class=\"loading\" role=\"status\">回答を生成しています...</div>\n");
    html.push_str("</form>\n");

    match view.outcome {
        PageOutcome::Idle => {}
        PageOutcome::Answer(response) => {
            html.push_str("<section>\n<h2>💡 LLMからの回答</h2>\n");
            let _ = writeln!(
                html,
                "<div class=\"answer\">{}</div>",
                escape_html(&response.text)
            );
            let _ = writeln!(
                html,
                "<p><small>{} · {}</small></p>",
                escape_html(&response.model),
                response.generated_at.format("%Y-%m-%d %H:%M UTC")
            );
            html.push_str("</section>\n");
        }
        PageOutcome::EmptyInput => {
            let _ = writeln!(
                html,
                "<div class=\"warning\" role=\"alert\">{}</div>",
                EMPTY_INPUT_WARNING
            );
        }
        PageOutcome::Failed => {
            let _ = writeln!(
                html,
                "<div class=\"error\" role=\"alert\">{}</div>",
                FAILURE_NOTICE
            );
        }
    }

    let _ = writeln!(html, "<script>{}</script>\n</body>\n</html>", SCRIPT);
    html
}

/// Escape text for element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
