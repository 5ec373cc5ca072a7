use newsgauge_core::Article;

const NO_ARTICLES: &str = "No Articles Found for this source at this time. Please try again later!";

/// A listing of recent articles from one news source.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceProfile {
    pub source_name: String,
    pub url: String,
    pub description: String,
    pub articles: Vec<Article>,
}

impl SourceProfile {
    /// Build a profile from the source's articles, newest first, keeping at
    /// most `limit`. The profile URL comes from the first article. A zero
    /// limit lists nothing and reads as the no-articles case.
    pub fn from_articles(source_name: &str, articles: Vec<Article>, limit: usize) -> Self {
        let Some(first) = articles.first().filter(|_| limit > 0) else {
            return Self {
                source_name: source_name.to_string(),
                url: String::new(),
                description: NO_ARTICLES.to_string(),
                articles: Vec::new(),
            };
        };

        let url = first.source_url.clone();
        let mut articles = articles;
        articles.truncate(limit);
        Self {
            source_name: source_name.to_string(),
            url,
            description: format!("Listing Articles from {source_name}."),
            articles,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsgauge_core::{ArticleDraft, Readability};

    fn article(i: usize) -> Article {
        Article::from_draft(
            ArticleDraft {
                title: Some(format!("Story {i}")),
                source_name: "TechCrunch".to_string(),
                source_url: "https://techcrunch.com".to_string(),
                ..ArticleDraft::default()
            },
            Readability::default(),
        )
    }

    #[test]
    fn empty_source_has_placeholder_description() {
        let profile = SourceProfile::from_articles("techCrunch", Vec::new(), 10);
        assert!(profile.is_empty());
        assert!(profile.url.is_empty());
        assert_eq!(profile.description, NO_ARTICLES);
        assert_eq!(profile.source_name, "techCrunch");
    }

    #[test]
    fn keeps_first_articles_up_to_limit() {
        let articles = (0..15).map(article).collect();
        let profile = SourceProfile::from_articles("TechCrunch", articles, 10);
        assert_eq!(profile.articles.len(), 10);
        assert_eq!(profile.articles[0].title_text(), "Story 0");
        assert_eq!(profile.articles[9].title_text(), "Story 9");
    }

    #[test]
    fn zero_limit_is_the_empty_case() {
        let articles = (0..3).map(article).collect();
        let profile = SourceProfile::from_articles("TechCrunch", articles, 0);
        assert!(profile.is_empty());
        assert!(profile.url.is_empty());
        assert_eq!(profile.description, NO_ARTICLES);
    }

    #[test]
    fn url_and_description_from_source() {
        let profile = SourceProfile::from_articles("TechCrunch", vec![article(0)], 10);
        assert_eq!(profile.url, "https://techcrunch.com");
        assert_eq!(profile.description, "Listing Articles from TechCrunch.");
    }
}
