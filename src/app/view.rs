// SPDX-License-Identifier: MPL-2.0
//! Rendering of the demo viewer.

use super::Message;
use crate::config::Preset;
use crate::viewer::ViewerState;
use iced::widget::{container, Button, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Padding, Theme};

/// Slide background colours, cycled by index.
const SLIDE_COLORS: [(f32, f32, f32); 6] = [
    (0.82, 0.33, 0.31),
    (0.93, 0.62, 0.24),
    (0.36, 0.66, 0.40),
    (0.24, 0.53, 0.80),
    (0.55, 0.40, 0.78),
    (0.30, 0.30, 0.34),
];

/// Borrowed view state assembled by `App::view`.
pub struct ViewContext<'a> {
    pub preset: Preset,
    pub state: ViewerState,
    pub items: &'a [String],
    pub liked: bool,
    pub chrome_visible: bool,
    pub details_open: bool,
    pub action_menu_open: bool,
    pub like_visible: bool,
    pub closed: bool,
    pub status: Option<&'a str>,
}

fn slide_color(index: usize) -> Color {
    let (r, g, b) = SLIDE_COLORS[index % SLIDE_COLORS.len()];
    Color::from_rgb(r, g, b)
}

/// Horizontal padding that shifts the slide by `offset` pixels.
fn offset_padding(offset: f32) -> Padding {
    Padding {
        top: 0.0,
        right: (-offset).max(0.0),
        bottom: 0.0,
        left: offset.max(0.0),
    }
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.closed {
        return closed_view();
    }

    let mut layout = Column::new().spacing(8).padding(12);
    if ctx.chrome_visible {
        layout = layout.push(header(&ctx));
    }
    layout = layout.push(slide(&ctx));
    if ctx.details_open {
        layout = layout.push(details_panel(&ctx));
    }
    if ctx.action_menu_open {
        layout = layout.push(action_menu());
    }
    if ctx.chrome_visible && ctx.items.len() > 1 {
        layout = layout.push(pagination(ctx.items.len(), ctx.state.current_index));
    }
    if let Some(status) = ctx.status {
        layout = layout.push(Text::new(status).size(12));
    }

    Container::new(layout)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn closed_view<'a>() -> Element<'a, Message> {
    let content = Column::new()
        .spacing(12)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Viewer closed").size(20))
        .push(Button::new(Text::new("Reopen")).on_press(Message::Reopen));

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let position = if ctx.items.is_empty() {
        "No items".to_string()
    } else {
        format!("{} / {}", ctx.state.current_index + 1, ctx.items.len())
    };
    let mut row = Row::new()
        .spacing(16)
        .push(Text::new(ctx.preset.name()).size(14))
        .push(Text::new(position).size(14))
        .push(Text::new(format!("x{:.2}", ctx.state.scale)).size(14));
    if ctx.liked {
        row = row.push(Text::new("liked").size(14));
    }
    row.into()
}

fn slide<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let index = ctx.state.current_index;
    let label = ctx
        .items
        .get(index)
        .map_or_else(|| "Nothing to show".to_string(), Clone::clone);

    let mut content = Column::new()
        .spacing(8)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(label).size(28));
    if ctx.like_visible {
        content = content.push(Text::new("Liked!").size(22));
    }

    let color = slide_color(index);
    let card = Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_theme: &Theme| container::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: 12.0_f32.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    Container::new(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(offset_padding(ctx.state.swipe_offset))
        .into()
}

fn details_panel<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let item = ctx
        .items
        .get(ctx.state.current_index)
        .map_or("-", String::as_str);
    Column::new()
        .spacing(4)
        .push(Text::new("Details").size(16))
        .push(Text::new(format!("Item: {}", item)).size(13))
        .push(Text::new(format!("Scale: {:.2}", ctx.state.scale)).size(13))
        .push(Text::new(format!("Liked: {}", if ctx.liked { "yes" } else { "no" })).size(13))
        .push(Button::new(Text::new("Close")).on_press(Message::DismissPanels))
        .into()
}

fn action_menu<'a>() -> Element<'a, Message> {
    Row::new()
        .spacing(8)
        .push(Button::new(Text::new("Reset zoom")).on_press(Message::ResetZoom))
        .push(Button::new(Text::new("Cancel")).on_press(Message::DismissPanels))
        .into()
}

fn pagination<'a>(count: usize, current: usize) -> Element<'a, Message> {
    let dots = (0..count).fold(Row::new().spacing(4), |row, index| {
        let marker = if index == current { "●" } else { "○" };
        row.push(Button::new(Text::new(marker)).on_press(Message::Select(index)))
    });
    Container::new(dots)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .into()
}
