//! Introduction form: field edits, tag selection, inline validation and the
//! two generation services.

mod intent;
mod reducer;
mod state;

use std::time::Instant;

pub use intent::{IntroEffect, IntroIntent};
pub use reducer::IntroReducer;
pub use state::{
    hash_tag, is_available_tag, merged_tags, photo_data_uri, FormField, IntroFormState, Notice,
    NoticeSeverity, ValidationError, AVAILABLE_TAGS, DEFAULT_MAX_TAGS, DEFAULT_WARNING_DURATION,
    MBTI_TYPES,
};

use crate::config::{IntroConfig, ServicesConfig};
use crate::profile::UserProfile;
use crate::services::{Big5, DescriptionService, GenerationOptions, TagService};
use crate::ui::mvi::Reducer;

#[derive(Debug, Default)]
pub struct IntroForm {
    state: IntroFormState,
}

impl IntroForm {
    pub fn new(intro: &IntroConfig, services: &ServicesConfig) -> Self {
        Self {
            state: IntroFormState {
                max_tags: intro.max_tags,
                warning_duration: intro.warning_duration(),
                options: GenerationOptions {
                    max_length: services.max_length,
                    language: services.language.clone(),
                },
                ..Default::default()
            },
        }
    }

    /// Start from an existing profile, e.g. to rewrite its introduction.
    pub fn prefilled(intro: &IntroConfig, services: &ServicesConfig, profile: &UserProfile) -> Self {
        let mut form = Self::new(intro, services);
        form.state.name = profile.name.clone();
        form.state.nickname = profile.nickname.clone();
        form.state.age = profile.age.to_string();
        form.state.mbti = profile.mbti.clone();
        form.state.description = profile.description.clone();
        form.state.profile_image = profile.profile_image.clone();
        form.state.selected_tags = profile
            .tags
            .iter()
            .take(form.state.max_tags)
            .cloned()
            .collect();
        form
    }

    pub fn state(&self) -> &IntroFormState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: IntroIntent) -> Vec<IntroEffect> {
        let state = std::mem::take(&mut self.state);
        let (next, effects) = IntroReducer::reduce(state, intent);
        self.state = next;
        effects
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.dispatch(IntroIntent::SetField {
            field,
            value: value.into(),
        });
    }

    pub fn set_big5(&mut self, big5: Big5) {
        self.dispatch(IntroIntent::SetBig5(big5));
    }

    pub fn toggle_tag(&mut self, tag: impl Into<String>, now: Instant) {
        self.dispatch(IntroIntent::ToggleTag {
            tag: tag.into(),
            now,
        });
    }

    pub fn toggle_auto_tag(&mut self, tag: impl Into<String>, now: Instant) {
        self.dispatch(IntroIntent::ToggleAutoTag {
            tag: tag.into(),
            now,
        });
    }

    pub fn tick(&mut self, now: Instant) {
        self.dispatch(IntroIntent::Tick { now });
    }

    pub fn dismiss_notice(&mut self) {
        self.dispatch(IntroIntent::DismissNotice);
    }

    /// Validate everything. Returns the profile to save when valid.
    pub fn submit(&mut self) -> Option<UserProfile> {
        self.dispatch(IntroIntent::Submit)
            .into_iter()
            .find_map(|effect| match effect {
                IntroEffect::ProfileReady(profile) => Some(profile),
                IntroEffect::FetchDescription(_) => None,
            })
    }

    /// Attach a photo and fill auto-detected tags from the tag service.
    ///
    /// Failure leaves the tags empty and shows an error notice; manual tag
    /// selection keeps working.
    pub async fn attach_photo(&mut self, service: &dyn TagService, file_name: &str, image: Vec<u8>) {
        self.dispatch(IntroIntent::PhotoSelected {
            image: photo_data_uri(file_name, &image),
        });

        match service.extract_tags(file_name, image).await {
            Ok(tags) => {
                self.dispatch(IntroIntent::TagsLoaded(tags));
            }
            Err(e) => {
                tracing::warn!(error = %e, "Tag extraction failed");
                self.dispatch(IntroIntent::TagsFailed);
            }
        }
    }

    /// Ask the description service for a draft and put it in the form.
    ///
    /// Returns the generated text, or `None` when validation blocked the
    /// request or the service failed (the notice says which).
    pub async fn generate_description(
        &mut self,
        service: &dyn DescriptionService,
    ) -> Option<String> {
        let request = self
            .dispatch(IntroIntent::RequestDescription)
            .into_iter()
            .find_map(|effect| match effect {
                IntroEffect::FetchDescription(request) => Some(request),
                IntroEffect::ProfileReady(_) => None,
            })?;

        match service.generate(&request).await {
            Ok(description) => {
                self.dispatch(IntroIntent::DescriptionGenerated(description.clone()));
                Some(description)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Description generation failed");
                self.dispatch(IntroIntent::DescriptionFailed(e.user_message()));
                None
            }
        }
    }
}
