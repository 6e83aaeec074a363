use tradequest_core::model::Testimonial;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestimonialCardVm {
    pub name: String,
    /// `None` when the record has no image path.
    pub avatar_src: Option<String>,
    pub avatar_alt: String,
    pub initial: String,
    pub progress: u8,
    pub quote: String,
}

#[must_use]
pub fn map_testimonial_card(testimonial: &Testimonial) -> TestimonialCardVm {
    let avatar = testimonial.avatar().trim();
    TestimonialCardVm {
        name: testimonial.name().to_owned(),
        avatar_src: (!avatar.is_empty()).then(|| avatar.to_owned()),
        avatar_alt: format!("{}'s avatar", testimonial.name()),
        initial: testimonial.initial(),
        progress: testimonial.clamped_progress(),
        quote: testimonial.text().to_owned(),
    }
}

#[must_use]
pub fn map_testimonial_cards(testimonials: &[Testimonial]) -> Vec<TestimonialCardVm> {
    testimonials.iter().map(map_testimonial_card).collect()
}
