use super::ReportSnapshot;

pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

const MARGIN_X: f32 = 20.0;
const BULLET_X: f32 = 24.0;
const WRAP_WIDTH_MM: f32 = 170.0;
const LINE_HEIGHT: f32 = 8.0;
const PAGE_TOP: f32 = 20.0;
/// Last baseline usable for body text; the footer sits on it.
pub const PAGE_BOTTOM: f32 = 284.0;

const TITLE_SIZE: f32 = 16.0;
const META_SIZE: f32 = 11.0;
const BODY_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 10.0;

/// Average Helvetica glyph width relative to the font size.
const AVG_GLYPH_EM: f32 = 0.5;
const MM_PER_POINT: f32 = 0.3528;

pub const REPORT_TITLE: &str = "Human Digital Trust Report";
pub const REPORT_FOOTER: &str = "Generated locally - your data never leaves this device";

/// One positioned run of text; `y_mm` is measured from the top edge.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub x_mm: f32,
    pub y_mm: f32,
    pub font_size: f32,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportPage {
    pub lines: Vec<TextLine>,
}

/// Paginated A4 layout of a report, independent of the output format.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportLayout {
    pub pages: Vec<ReportPage>,
}

impl ReportLayout {
    pub fn build(snapshot: &ReportSnapshot) -> Self {
        let mut cursor = LayoutCursor::new();

        cursor.place(MARGIN_X, 18.0, TITLE_SIZE, REPORT_TITLE);
        cursor.place(MARGIN_X, 34.0, META_SIZE, &format!("Name: {}", snapshot.name));
        cursor.place(MARGIN_X, 42.0, META_SIZE, &format!("Email: {}", snapshot.email));
        cursor.place(MARGIN_X, 50.0, META_SIZE, &format!("Phone: {}", snapshot.phone));
        cursor.place(MARGIN_X, 62.0, META_SIZE, &format!("Score: {}", snapshot.score_label));
        cursor.place(MARGIN_X, 70.0, META_SIZE, &snapshot.risk_label);
        cursor.place(
            MARGIN_X,
            78.0,
            META_SIZE,
            &format!("Generated: {}", snapshot.generated_on.format("%Y-%m-%d")),
        );

        cursor.y = 86.0;
        cursor.heading("Insights:");
        cursor.bullets(&snapshot.insights);

        cursor.y += 4.0;
        cursor.heading("Recommendations:");
        cursor.bullets(&snapshot.recommendations);

        cursor.break_if_past_bottom();
        cursor.place(MARGIN_X, PAGE_BOTTOM, FOOTER_SIZE, REPORT_FOOTER);

        Self {
            pages: cursor.pages,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.pages
            .iter()
            .flat_map(|page| page.lines.iter().map(|line| line.text.as_str()))
    }
}

struct LayoutCursor {
    pages: Vec<ReportPage>,
    y: f32,
}

impl LayoutCursor {
    fn new() -> Self {
        Self {
            pages: vec![ReportPage::default()],
            y: PAGE_TOP,
        }
    }

    fn place(&mut self, x_mm: f32, y_mm: f32, font_size: f32, text: &str) {
        if let Some(page) = self.pages.last_mut() {
            page.lines.push(TextLine {
                x_mm,
                y_mm,
                font_size,
                text: text.to_string(),
            });
        }
    }

    fn break_if_past_bottom(&mut self) {
        if self.y > PAGE_BOTTOM {
            self.pages.push(ReportPage::default());
            self.y = PAGE_TOP;
        }
    }

    fn heading(&mut self, text: &str) {
        self.break_if_past_bottom();
        self.place(MARGIN_X, self.y, BODY_SIZE, text);
        self.y += LINE_HEIGHT;
    }

    fn bullets(&mut self, items: &[String]) {
        let max_chars = chars_per_line(BODY_SIZE, WRAP_WIDTH_MM);
        for item in items {
            for line in wrap_text(&format!("- {item}"), max_chars) {
                self.break_if_past_bottom();
                self.place(BULLET_X, self.y, BODY_SIZE, &line);
                self.y += LINE_HEIGHT;
            }
        }
    }
}

fn chars_per_line(font_size: f32, width_mm: f32) -> usize {
    let glyph_mm = font_size * MM_PER_POINT * AVG_GLYPH_EM;
    ((width_mm / glyph_mm).floor() as usize).max(1)
}

/// Greedy word wrap; words longer than a line are split.
pub(crate) fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > max_chars {
            if current_len > 0 {
                lines.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let rest = word.split_off(max_chars);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        if word.is_empty() {
            continue;
        }

        let needed = if current_len == 0 {
            word.len()
        } else {
            current_len + 1 + word.len()
        };
        if needed > max_chars {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if current_len > 0 {
            current.push(' ');
            current_len += 1;
        }
        current.extend(word.iter());
        current_len += word.len();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
