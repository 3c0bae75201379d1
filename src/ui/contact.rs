// SPDX-License-Identifier: MPL-2.0
//! Contact section: boutique details and the inquiry form.
//!
//! The left panel shows the address, phone number, and trading hours;
//! the right panel holds the inquiry form. The form collects a name and
//! a treatment choice but never submits anywhere; bookings are taken
//! over the phone. External references (the map URL, the phone URI) are
//! rendered as text.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use iced::{
    widget::{button, pick_list, rule, text_input, Column, Container, Row, Text},
    Element, Length,
};
use std::fmt;

/// Phone number as displayed in the navbar and the contact panel.
pub const PHONE_DISPLAY: &str = "(011) XXX-XXXX";

/// Phone URI behind the displayed number.
pub const PHONE_URI: &str = "tel:+27110000000";

/// External map reference for the boutique's address.
pub const MAP_URL: &str = "https://maps.google.com/?q=595+Seventh+Rd+Halfway+Gardens+Midrand";

/// Street address, one entry per display line.
pub const ADDRESS_LINES: [&str; 2] = [
    "595 Seventh Rd, Halfway Gardens",
    "Midrand, 1686, South Africa",
];

/// Trading hours, paired with the localization key of the day label.
const HOURS: [(&str, &str); 3] = [
    ("contact-hours-monday", "09:00 - 18:00"),
    ("contact-hours-tue-sat", "08:00 - 18:00"),
    ("contact-hours-sunday", "08:30 - 17:00"),
];

/// The fixed treatment choices offered on the inquiry form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Treatment {
    #[default]
    BalayageStyling,
    BespokeBraiding,
    LocsMaintenance,
    ProfessionalCut,
}

impl Treatment {
    /// All choices in display order.
    pub const ALL: [Treatment; 4] = [
        Treatment::BalayageStyling,
        Treatment::BespokeBraiding,
        Treatment::LocsMaintenance,
        Treatment::ProfessionalCut,
    ];

    /// Display label. Treatment names are catalog data, not chrome, so
    /// they stay constant like the service menu itself.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Treatment::BalayageStyling => "Balayage & Styling",
            Treatment::BespokeBraiding => "Bespoke Braiding",
            Treatment::LocsMaintenance => "Locs Maintenance",
            Treatment::ProfessionalCut => "Professional Cut",
        }
    }
}

impl fmt::Display for Treatment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// State for the contact section: the inquiry form fields.
#[derive(Debug, Clone, Default)]
pub struct State {
    pub name: String,
    pub treatment: Treatment,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Contextual data needed to render the contact section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Messages emitted by the contact section.
#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    TreatmentSelected(Treatment),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
}

/// Process a contact message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::NameChanged(name) => {
            state.name = name;
            Event::None
        }
        Message::TreatmentSelected(treatment) => {
            state.treatment = treatment;
            Event::None
        }
        Message::SubmitPressed => {
            // The form never submits anywhere; the storefront takes
            // bookings over the phone only.
            Event::None
        }
    }
}

/// Render the contact section.
#[must_use]
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let boutique = boutique_panel(ctx.i18n);
    let form = form_panel(ctx.i18n, ctx.state);

    let spread = Row::new().spacing(spacing::XL).push(boutique).push(form);

    Container::new(spread)
        .width(Length::Fill)
        .padding([spacing::XXL, spacing::XL])
        .into()
}

/// Build the inverted boutique-details panel.
fn boutique_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    let kicker = Text::new(i18n.tr("contact-kicker"))
        .size(typography::CAPTION)
        .color(palette::GOLD_500);
    let title = Text::new(i18n.tr("contact-title")).size(typography::TITLE_LG);

    let mut address = Column::new().spacing(spacing::XXS).push(
        Text::new(i18n.tr("contact-address-label"))
            .size(typography::CAPTION)
            .color(palette::STONE_300),
    );
    for line in ADDRESS_LINES {
        address = address.push(Text::new(line).size(typography::BODY));
    }
    address = address.push(
        Text::new(format!("{}: {}", i18n.tr("contact-map-link-label"), MAP_URL))
            .size(typography::CAPTION)
            .color(palette::GOLD_300),
    );

    let inquiries = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("contact-inquiries-label"))
                .size(typography::CAPTION)
                .color(palette::STONE_300),
        )
        .push(
            Text::new(PHONE_DISPLAY)
                .size(typography::TITLE_MD)
                .color(palette::GOLD_500),
        )
        .push(Text::new(i18n.tr("contact-phone-hint")).size(typography::BODY));

    let mut hours = Column::new().spacing(spacing::XXS).push(
        Text::new(i18n.tr("contact-hours-label"))
            .size(typography::CAPTION)
            .color(palette::STONE_300),
    );
    for (day_key, times) in HOURS {
        hours = hours.push(
            Row::new()
                .spacing(spacing::MD)
                .push(
                    Container::new(Text::new(i18n.tr(day_key)).size(typography::BODY))
                        .width(Length::Fixed(180.0)),
                )
                .push(Text::new(times).size(typography::BODY)),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .push(kicker)
        .push(title)
        .push(address)
        .push(inquiries)
        .push(hours);

    Container::new(content)
        .padding(spacing::XL)
        .style(styles::container::boutique_panel)
        .into()
}

/// Build the inquiry form panel.
fn form_panel<'a>(i18n: &I18n, state: &'a State) -> Element<'a, Message> {
    let title = Text::new(i18n.tr("contact-form-title")).size(typography::TITLE_SM);

    let name_label = Text::new(i18n.tr("contact-form-name-label"))
        .size(typography::CAPTION)
        .color(palette::STONE_500);
    let name_input = text_input(&i18n.tr("contact-form-name-placeholder"), &state.name)
        .on_input(Message::NameChanged)
        .padding(spacing::SM)
        .size(typography::BODY_LG);

    let treatment_label = Text::new(i18n.tr("contact-form-treatment-label"))
        .size(typography::CAPTION)
        .color(palette::STONE_500);
    let treatment_picker = pick_list(
        &Treatment::ALL[..],
        Some(state.treatment),
        Message::TreatmentSelected,
    )
    .padding(spacing::SM)
    .width(Length::Fill);

    let submit = button(Text::new(i18n.tr("contact-form-submit")).size(typography::BODY))
        .on_press(Message::SubmitPressed)
        .padding([spacing::SM, spacing::XL])
        .width(Length::Fill)
        .style(styles::button::primary);

    let content = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(rule::horizontal(1))
        .push(name_label)
        .push(name_input)
        .push(treatment_label)
        .push(treatment_picker)
        .push(submit);

    Container::new(content)
        .width(Length::Fixed(360.0))
        .padding(spacing::XL)
        .style(styles::container::card)
        .into()
}
