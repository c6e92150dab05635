use crate::wiki::types::{ArticleSummaries, RandomArticles};
use std::fmt::Write;

/// Render three lines per article, in random-list order. Articles with no
/// entry in `summaries` get an empty summary.
pub fn render(random: &RandomArticles, summaries: &ArticleSummaries) -> String {
    let mut out = String::new();
    for article in &random.articles {
        // Writing to a String cannot fail
        let _ = writeln!(out, "Id: {}", article.id);
        let _ = writeln!(out, "Title: {}", article.title);
        let _ = writeln!(out, "Summary: {}", summaries.extract_for(article.id));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wiki::types::{ArticleReference, ArticleSummary};

    fn article(id: u64, title: &str) -> ArticleReference {
        ArticleReference {
            id,
            namespace_id: 0,
            title: title.to_string(),
        }
    }

    #[test]
    fn test_render_joins_by_id() {
        let random = RandomArticles {
            articles: vec![article(2, "B"), article(1, "A")],
            ..Default::default()
        };
        let mut summaries = ArticleSummaries::default();
        for (id, extract) in [(1, "extract-A"), (2, "extract-B")] {
            summaries.pages.insert(
                id.to_string(),
                ArticleSummary {
                    page_id: id,
                    extract: extract.to_string(),
                    ..Default::default()
                },
            );
        }

        assert_eq!(
            render(&random, &summaries),
            "Id: 2\nTitle: B\nSummary: extract-B\nId: 1\nTitle: A\nSummary: extract-A\n"
        );
    }

    #[test]
    fn test_render_missing_summary_is_blank() {
        let random = RandomArticles {
            articles: vec![article(9, "Nine")],
            ..Default::default()
        };
        let out = render(&random, &ArticleSummaries::default());
        assert_eq!(out, "Id: 9\nTitle: Nine\nSummary: \n");
    }

    #[test]
    fn test_render_nothing() {
        assert_eq!(render(&RandomArticles::default(), &ArticleSummaries::default()), "");
    }
}
