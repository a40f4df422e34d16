//! Rich media check: images and videos in the body.

use contentscore_core::errors::RuleError;
use contentscore_core::traits::{OverrideProvider, TextProvider};

use super::{points, tr};
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::{AnalysisResult, Rule};
use crate::text::patterns::{
    count_matches, RE_GALLERY, RE_IFRAME, RE_IMG, RE_VIDEO_SHORTCODE, RE_VIDEO_TAG, RE_VIDEO_URL,
};

/// Images and videos tallied into one capped score.
pub struct ContentHasAssets {
    score: u32,
}

impl ContentHasAssets {
    pub fn new(overrides: &dyn OverrideProvider) -> Self {
        Self {
            score: overrides.score(ids::CONTENT_HAS_ASSETS, 6),
        }
    }

    /// Images in the body (tags and gallery shortcodes) plus the thumbnail.
    pub fn image_count(paper: &Paper) -> usize {
        let text = paper.text();
        count_matches(&RE_IMG, text)
            + count_matches(&RE_GALLERY, text)
            + usize::from(paper.has_thumbnail())
    }

    /// Embeds, video tags, video shortcodes and bare video URLs.
    pub fn video_count(text: &str) -> usize {
        count_matches(&RE_IFRAME, text)
            + count_matches(&RE_VIDEO_SHORTCODE, text)
            + count_matches(&RE_VIDEO_TAG, text)
            + count_matches(&RE_VIDEO_URL, text)
    }

    fn images_score(images: usize) -> u32 {
        match images {
            0 => 0,
            1 => 1,
            2 => 2,
            3 => 4,
            _ => 6,
        }
    }

    fn videos_score(videos: usize) -> u32 {
        match videos {
            0 => 0,
            1 => 1,
            _ => 2,
        }
    }

    pub fn tally(&self, paper: &Paper) -> u32 {
        let total = Self::images_score(Self::image_count(paper))
            + Self::videos_score(Self::video_count(paper.text()));
        total.min(self.score)
    }
}

impl Rule for ContentHasAssets {
    fn id(&self) -> &'static str {
        ids::CONTENT_HAS_ASSETS
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_text() || paper.has_thumbnail()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Add a few images and/or videos to make your content appealing.", &[])
    }

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        Some(tr(
            text,
            "Content with images and/or video feels more inviting to users. It also helps supplement your textual content.",
            &[],
        ))
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let mut result = self.new_result(paper, text);
        if !paper.has_text() {
            // Only a thumbnail to go on.
            result.set_score(Some(1));
        } else {
            result.set_score(points(self.tally(paper)));
        }

        result.set_text(tr(
            text,
            if result.has_score() {
                "Your content contains images and/or video(s)."
            } else {
                "You are not using rich media like images or videos."
            },
            &[],
        ));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use contentscore_core::traits::StaticOverrides;

    use super::super::test_support::run;
    use super::*;

    #[test]
    fn image_tally_steps() {
        let rule = ContentHasAssets::new(&StaticOverrides);
        let with_images = |n: usize| {
            Paper::builder()
                .text(format!("<p>text</p>{}", "<img src=\"a.png\">".repeat(n)))
                .build()
        };
        assert_eq!(rule.tally(&with_images(1)), 1);
        assert_eq!(rule.tally(&with_images(3)), 4);
        assert_eq!(rule.tally(&with_images(5)), 6);
    }

    #[test]
    fn images_and_videos_are_capped() {
        let rule = ContentHasAssets::new(&StaticOverrides);
        let paper = Paper::builder()
            .text("<img src=\"a\"><img src=\"b\"><img src=\"c\"><img src=\"d\"><video src=\"v.mp4\"></video>")
            .build();
        assert_eq!(run(&rule, &paper).score(), Some(6));
    }

    #[test]
    fn youtube_url_counts_as_video() {
        assert_eq!(
            ContentHasAssets::video_count("Watch https://www.youtube.com/watch?v=abc123 now"),
            1
        );
    }

    #[test]
    fn thumbnail_only() {
        let rule = ContentHasAssets::new(&StaticOverrides);
        let paper = Paper::builder().thumbnail("cover.png").build();
        let result = run(&rule, &paper);
        assert_eq!(result.score(), Some(1));
    }

    #[test]
    fn text_without_media() {
        let rule = ContentHasAssets::new(&StaticOverrides);
        let result = run(&rule, &Paper::builder().text("just words").build());
        assert_eq!(result.score(), None);
        assert_eq!(result.text(), "You are not using rich media like images or videos.");
    }
}
