//! Reducer for introduction form state transitions.

use std::time::Instant;

use crate::profile::UserProfile;
use crate::services::{DescriptionRequest, ImageHints, Personality};
use crate::ui::mvi::Reducer;

use super::intent::{IntroEffect, IntroIntent};
use super::state::{hash_tag, is_available_tag, merged_tags, FormField, IntroFormState, Notice};

pub struct IntroReducer;

impl Reducer for IntroReducer {
    type State = IntroFormState;
    type Intent = IntroIntent;
    type Effect = IntroEffect;

    fn reduce(
        mut state: Self::State,
        intent: Self::Intent,
    ) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            IntroIntent::SetField { field, value } => {
                match state.field_mut(field) {
                    Some(slot) => {
                        *slot = value;
                        state.errors.remove(&field);
                    }
                    None => tracing::debug!(%field, "Field is not free text"),
                }
                (state, Vec::new())
            }

            IntroIntent::SetBig5(big5) => {
                state.big5 = big5;
                (state, Vec::new())
            }

            IntroIntent::ToggleTag { tag, now } => {
                if !is_available_tag(&tag) {
                    tracing::debug!(%tag, "Tag is not selectable");
                    return (state, Vec::new());
                }
                (toggle_tag(state, tag, now), Vec::new())
            }

            IntroIntent::ToggleAutoTag { tag, now } => {
                (toggle_tag(state, hash_tag(&tag), now), Vec::new())
            }

            IntroIntent::PhotoSelected { image } => {
                state.profile_image = image;
                state.loading_tags = true;
                state.auto_tags.clear();
                (state, Vec::new())
            }

            IntroIntent::TagsLoaded(tags) => {
                state.loading_tags = false;
                if tags.is_empty() {
                    tracing::debug!("Tag service returned no tags");
                    return (state, Vec::new());
                }
                state.auto_tags = tags;
                state.errors.remove(&FormField::Tags);
                state.notice = Some(Notice::info("Extracted tags from the image."));
                (state, Vec::new())
            }

            IntroIntent::TagsFailed => {
                state.loading_tags = false;
                state.auto_tags.clear();
                state.notice = Some(Notice::error("Failed to generate tags from the image."));
                (state, Vec::new())
            }

            IntroIntent::RequestDescription => {
                if state.generating_description {
                    return (state, Vec::new());
                }
                if let Err((field, error)) = state.validate_for_description() {
                    state.errors.insert(field, error);
                    return (state, Vec::new());
                }

                state.generating_description = true;
                let request = build_request(&state);
                (state, vec![IntroEffect::FetchDescription(request)])
            }

            IntroIntent::DescriptionGenerated(description) => {
                state.generating_description = false;
                state.description = description;
                state.errors.remove(&FormField::Description);
                state.notice = Some(Notice::success("Introduction draft generated."));
                (state, Vec::new())
            }

            IntroIntent::DescriptionFailed(message) => {
                state.generating_description = false;
                state.notice = Some(Notice::error(format!(
                    "Failed to generate introduction: {}",
                    message
                )));
                (state, Vec::new())
            }

            IntroIntent::Submit => {
                state.errors = state.validate();
                if !state.errors.is_empty() {
                    tracing::debug!(errors = state.errors.len(), "Submit rejected");
                    return (state, Vec::new());
                }

                let profile = build_profile(&state);
                state.notice = Some(Notice::success("Introduction saved."));
                (state, vec![IntroEffect::ProfileReady(profile)])
            }

            IntroIntent::DismissNotice => {
                state.notice = None;
                (state, Vec::new())
            }

            IntroIntent::Tick { now } => {
                if state.tag_warning_until.is_some_and(|until| now >= until) {
                    state.tag_warning_until = None;
                }
                (state, Vec::new())
            }
        }
    }
}

/// Deselect if selected, select if under the cap, otherwise warn.
fn toggle_tag(mut state: IntroFormState, tag: String, now: Instant) -> IntroFormState {
    if let Some(pos) = state.selected_tags.iter().position(|t| *t == tag) {
        state.selected_tags.remove(pos);
    } else if state.selected_tags.len() < state.max_tags {
        state.selected_tags.push(tag);
        state.errors.remove(&FormField::Tags);
    } else {
        state.tag_warning_until = Some(now + state.warning_duration);
    }
    state
}

fn build_request(state: &IntroFormState) -> DescriptionRequest {
    let nickname = Some(state.nickname.clone()).filter(|n| !n.trim().is_empty());

    DescriptionRequest {
        name: state.name.clone(),
        nickname,
        age: state.parsed_age(),
        personality: Personality {
            mbti: state.mbti.trim().to_ascii_uppercase(),
            big5: state.big5,
            tags: merged_tags(&state.selected_tags, &state.auto_tags),
        },
        image: state.has_photo().then(|| ImageHints {
            has_image: true,
            auto_detected_tags: state.auto_tags.iter().map(|t| hash_tag(t)).collect(),
        }),
        options: state.options.clone(),
    }
}

fn build_profile(state: &IntroFormState) -> UserProfile {
    UserProfile {
        name: state.name.trim().to_string(),
        nickname: state.nickname.trim().to_string(),
        age: state.parsed_age().unwrap_or_default(),
        mbti: state.mbti.trim().to_ascii_uppercase(),
        tags: state
            .selected_tags
            .iter()
            .chain(state.auto_tags.iter())
            .cloned()
            .collect(),
        description: state.description.clone(),
        profile_image: state.profile_image.clone(),
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::ui::intro::NoticeSeverity;

    fn filled() -> IntroFormState {
        IntroFormState {
            name: "Mina".to_string(),
            nickname: "mimi".to_string(),
            age: "27".to_string(),
            mbti: "infp".to_string(),
            description: "Likes long walks.".to_string(),
            selected_tags: vec!["창의적".to_string()],
            ..Default::default()
        }
    }

    #[test]
    fn set_field_clears_its_error() {
        let (state, _) = IntroReducer::reduce(IntroFormState::default(), IntroIntent::Submit);
        assert!(state.errors.contains_key(&FormField::Name));

        let (state, _) = IntroReducer::reduce(
            state,
            IntroIntent::SetField {
                field: FormField::Name,
                value: "Mina".to_string(),
            },
        );
        assert_eq!(state.name, "Mina");
        assert!(!state.errors.contains_key(&FormField::Name));
        assert!(state.errors.contains_key(&FormField::Nickname));
    }

    #[test]
    fn photo_then_failure_leaves_tags_empty_with_error_notice() {
        let (state, _) = IntroReducer::reduce(
            filled(),
            IntroIntent::PhotoSelected {
                image: "data:image/png;base64,AA==".to_string(),
            },
        );
        assert!(state.loading_tags);
        assert!(state.has_photo());

        let (state, _) = IntroReducer::reduce(state, IntroIntent::TagsFailed);
        assert!(!state.loading_tags);
        assert!(state.auto_tags.is_empty());
        assert_eq!(
            state.notice.as_ref().map(|n| n.severity),
            Some(NoticeSeverity::Error)
        );
    }

    #[test]
    fn request_description_builds_payload() {
        let mut form = filled();
        form.profile_image = "data:image/png;base64,AA==".to_string();
        form.auto_tags = vec!["smile".to_string(), "#창의적".to_string()];

        let (state, effects) = IntroReducer::reduce(form, IntroIntent::RequestDescription);
        assert!(state.generating_description);

        let [IntroEffect::FetchDescription(request)] = effects.as_slice() else {
            panic!("expected one FetchDescription effect, got {effects:?}");
        };
        assert_eq!(request.personality.mbti, "INFP");
        assert_eq!(request.personality.tags, vec!["창의적", "#smile"]);
        assert_eq!(request.age, Some(27));
        assert_eq!(request.nickname.as_deref(), Some("mimi"));
        let image = request.image.as_ref().unwrap();
        assert_eq!(image.auto_detected_tags, vec!["#smile", "#창의적"]);
    }

    #[test]
    fn empty_tag_result_shows_no_notice() {
        let (state, _) = IntroReducer::reduce(
            filled(),
            IntroIntent::PhotoSelected {
                image: "data:image/png;base64,AA==".to_string(),
            },
        );
        let (state, _) = IntroReducer::reduce(state, IntroIntent::TagsLoaded(Vec::new()));
        assert!(!state.loading_tags);
        assert!(state.auto_tags.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn unknown_manual_tag_is_ignored() {
        let (state, _) = IntroReducer::reduce(
            IntroFormState::default(),
            IntroIntent::ToggleTag {
                tag: "스카이다이빙".to_string(),
                now: Instant::now(),
            },
        );
        assert!(state.selected_tags.is_empty());
        assert!(!state.tag_warning_visible());
    }

    #[test]
    fn request_description_while_generating_is_ignored() {
        let mut form = filled();
        form.generating_description = true;
        let (_, effects) = IntroReducer::reduce(form, IntroIntent::RequestDescription);
        assert!(effects.is_empty());
    }

    #[test]
    fn description_failure_keeps_text_and_reports_message() {
        let mut form = filled();
        form.generating_description = true;
        let (state, _) = IntroReducer::reduce(
            form,
            IntroIntent::DescriptionFailed("quota exceeded".to_string()),
        );
        assert!(!state.generating_description);
        assert_eq!(state.description, "Likes long walks.");
        assert_eq!(
            state.notice.unwrap().message,
            "Failed to generate introduction: quota exceeded"
        );
    }

    #[test]
    fn valid_submit_emits_profile() {
        let (state, effects) = IntroReducer::reduce(filled(), IntroIntent::Submit);
        assert!(state.errors.is_empty());
        let [IntroEffect::ProfileReady(profile)] = effects.as_slice() else {
            panic!("expected ProfileReady, got {effects:?}");
        };
        assert_eq!(profile.age, 27);
        assert_eq!(profile.mbti, "INFP");
        assert_eq!(profile.tags, vec!["창의적"]);
        assert!(profile.profile_image.is_empty());
    }

    #[test]
    fn submit_keeps_photo() {
        let form = IntroFormState {
            profile_image: "data:image/jpeg;base64,AA==".to_string(),
            ..filled()
        };
        let (_, effects) = IntroReducer::reduce(form, IntroIntent::Submit);
        let [IntroEffect::ProfileReady(profile)] = effects.as_slice() else {
            panic!("expected ProfileReady, got {effects:?}");
        };
        assert_eq!(profile.profile_image, "data:image/jpeg;base64,AA==");
    }

    #[test]
    fn warning_hides_on_tick_after_duration() {
        let now = Instant::now();
        let mut form = filled();
        form.max_tags = 1;

        let (state, _) = IntroReducer::reduce(
            form,
            IntroIntent::ToggleTag {
                tag: "열정적".to_string(),
                now,
            },
        );
        assert!(state.tag_warning_visible());
        assert_eq!(state.selected_tags, vec!["창의적"]);

        let (state, _) = IntroReducer::reduce(
            state,
            IntroIntent::Tick {
                now: now + Duration::from_secs(2),
            },
        );
        assert!(state.tag_warning_visible());

        let (state, _) = IntroReducer::reduce(
            state,
            IntroIntent::Tick {
                now: now + Duration::from_secs(3),
            },
        );
        assert!(!state.tag_warning_visible());
    }
}
