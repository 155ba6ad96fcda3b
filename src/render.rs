//! Terminal rendering of feed items, post details and categories.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::color::ColorScheme;
use crate::html::strip_html;
use crate::view_model::{PostDetailViewModel, PostItemViewModel};
use crate::wordpress::Category;

/// Display width excerpts are cut to in list output.
pub const EXCERPT_WIDTH: usize = 100;

/// Render a list of posts, one block per post separated by blank lines.
pub fn render_items(items: &[PostItemViewModel], colors: &ColorScheme) -> String {
  items
    .iter()
    .map(|item| render_item(item, colors))
    .collect::<Vec<_>>()
    .join("\n\n")
}

/// Render one list entry: title line, date and tags, truncated excerpt, image.
pub fn render_item(item: &PostItemViewModel, colors: &ColorScheme) -> String {
  let mut lines = vec![format!(
    "{} {}",
    colors.number(format!("#{}", item.id)),
    colors.title(&item.plain_title)
  )];

  let mut meta = colors.dimmed(&item.formatted_date);
  if !item.tags.is_empty() {
    let tags = item
      .tags
      .iter()
      .map(|tag| colors.tag(tag))
      .collect::<Vec<_>>()
      .join(", ");
    meta = format!("{meta} | {tags}");
  }
  lines.push(format!("  {meta}"));

  let excerpt = item.plain_excerpt.replace('\n', " ");
  if !excerpt.is_empty() {
    lines.push(format!("  {}", truncate_to_width(&excerpt, EXCERPT_WIDTH)));
  }

  if let Some(url) = &item.image_url {
    lines.push(format!("  {}", colors.link(url)));
  }

  lines.join("\n")
}

/// Render a post detail. The body is shown as plain text unless `raw_html`.
pub fn render_detail(detail: &PostDetailViewModel, colors: &ColorScheme, raw_html: bool) -> String {
  let mut out = format!(
    "{}\n{}",
    colors.title(&detail.plain_title),
    colors.dimmed(&detail.formatted_date)
  );

  if !detail.tags.is_empty() {
    let tags = detail
      .tags
      .iter()
      .map(|tag| colors.tag(format!("#{tag}")))
      .collect::<Vec<_>>()
      .join(" ");
    out.push('\n');
    out.push_str(&tags);
  }

  if let Some(url) = &detail.image_url {
    out.push('\n');
    out.push_str(&colors.link(url));
  }

  let body = if raw_html {
    detail.content.trim().to_string()
  } else {
    strip_html(&detail.content)
  };
  out.push_str("\n\n");
  out.push_str(&body);

  out
}

/// Render categories as aligned `id  slug  name (count)` rows.
pub fn render_categories(categories: &[Category], colors: &ColorScheme) -> String {
  let id_width = categories.iter().map(|c| c.id.to_string().len()).max().unwrap_or(0);
  let slug_width = categories.iter().map(|c| c.slug.width()).max().unwrap_or(0);

  categories
    .iter()
    .map(|category| {
      let id = format!("{:>id_width$}", category.id);
      let slug_pad = " ".repeat(slug_width - category.slug.width());
      let name = category.name.as_deref().map(strip_html).unwrap_or_default();
      let count = category
        .count
        .map(|count| format!(" ({count})"))
        .unwrap_or_default();
      format!(
        "{}  {}{}  {}{}",
        colors.number(id),
        colors.emphasis(&category.slug),
        slug_pad,
        name,
        colors.dimmed(count)
      )
      .trim_end()
      .to_string()
    })
    .collect::<Vec<_>>()
    .join("\n")
}

/// Cut `text` to at most `max_width` terminal columns, ending with `…` when
/// something was removed.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
  if text.width() <= max_width {
    return text.to_string();
  }

  let budget = max_width.saturating_sub(1);
  let mut used = 0;
  let mut out = String::new();
  for ch in text.chars() {
    let w = ch.width().unwrap_or(0);
    if used + w > budget {
      break;
    }
    used += w;
    out.push(ch);
  }

  format!("{}\u{2026}", out.trim_end())
}
