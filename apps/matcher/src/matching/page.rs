// HTML for the match form. Rendered server-side; no scripts, no assets.

use crate::matching::normalizer::WordSet;

pub const PAGE_TITLE: &str = "Resume and Job Description Matcher";
pub const MISSING_PATHS_MESSAGE: &str = "Please provide both file paths.";
pub const NO_MATCH_MESSAGE: &str = "No common words found or an error occurred.";

/// Page template. Replace `{title}`, `{resume_path}`, `{job_description_path}` and `{result}` before serving.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>{title}</h1>
<form method="post" action="/match">
<p><label>Enter the path to the resumes file:<br>
<input type="text" name="resume_path" value="{resume_path}" size="60"></label></p>
<p><label>Enter the path to the job descriptions file:<br>
<input type="text" name="job_description_path" value="{job_description_path}" size="60"></label></p>
<p><button type="submit">Match</button></p>
</form>
{result}
</body>
</html>
"#;

/// What to show under the form.
#[derive(Debug, Clone)]
pub enum PageMessage {
    Empty,
    MissingPaths,
    NotFound(String),
    NoCommonWords,
    CommonWords(WordSet),
}

pub fn render_page(resume_path: &str, job_description_path: &str, message: &PageMessage) -> String {
    PAGE_TEMPLATE
        .replace("{title}", PAGE_TITLE)
        .replace("{resume_path}", &escape_html(resume_path))
        .replace("{job_description_path}", &escape_html(job_description_path))
        .replace("{result}", &render_message(message))
}

fn render_message(message: &PageMessage) -> String {
    match message {
        PageMessage::Empty => String::new(),
        PageMessage::MissingPaths => error_block(MISSING_PATHS_MESSAGE),
        // a missing file shows the error and the empty-result line, like any other empty match
        PageMessage::NotFound(msg) => format!("{}\n<p>{NO_MATCH_MESSAGE}</p>", error_block(msg)),
        PageMessage::NoCommonWords => format!("<p>{NO_MATCH_MESSAGE}</p>"),
        PageMessage::CommonWords(words) => {
            let items: Vec<String> = words
                .iter()
                .map(|w| format!("<li>{}</li>", escape_html(w)))
                .collect();
            format!("<p>Common words:</p>\n<ul>\n{}\n</ul>", items.join("\n"))
        }
    }
}

fn error_block(msg: &str) -> String {
    format!(r#"<p class="error" role="alert">{}</p>"#, escape_html(msg))
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_page_has_title_and_inputs() {
        let html = render_page("", "", &PageMessage::Empty);
        assert!(html.contains(PAGE_TITLE));
        assert!(html.contains(r#"name="resume_path""#));
        assert!(html.contains(r#"name="job_description_path""#));
        assert!(!html.contains("{result}"));
    }

    #[test]
    fn test_submitted_paths_are_echoed_escaped() {
        let html = render_page("/tmp/a\"b.txt", "/tmp/<jd>.txt", &PageMessage::Empty);
        assert!(html.contains("/tmp/a&quot;b.txt"));
        assert!(html.contains("/tmp/&lt;jd&gt;.txt"));
    }

    #[test]
    fn test_common_words_listed_in_order() {
        let words: WordSet = ["rust", "go"].iter().map(|w| w.to_string()).collect();
        let html = render_page("r", "j", &PageMessage::CommonWords(words));
        let go = html.find("<li>go</li>").unwrap();
        let rust = html.find("<li>rust</li>").unwrap();
        assert!(go < rust);
        assert!(html.contains("Common words:"));
    }

    #[test]
    fn test_not_found_shows_error_and_empty_line() {
        let html = render_page(
            "r",
            "j",
            &PageMessage::NotFound("r does not exist.".to_string()),
        );
        assert!(html.contains("r does not exist."));
        assert!(html.contains(NO_MATCH_MESSAGE));
    }

    #[test]
    fn test_words_are_escaped() {
        let words: WordSet = ["<script>"].iter().map(|w| w.to_string()).collect();
        let html = render_page("r", "j", &PageMessage::CommonWords(words));
        assert!(html.contains("<li>&lt;script&gt;</li>"));
        assert!(!html.contains("<li><script></li>"));
    }
}
