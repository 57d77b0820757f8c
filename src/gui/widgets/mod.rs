use iced::{
    Color, Element, Length, Theme, border,
    widget::{Column, column, container, container::Style, image, row, scrollable, text},
};
use iced::widget::container::bordered_box;
use iced::widget::image::Handle;

use crate::gui::state::Notice;
use crate::models::RegionRecord;

const COLUMN_WIDTH: f32 = 72.0;

impl Notice {
    pub fn message(&self) -> &str {
        match self {
            Notice::Success(msg) | Notice::Info(msg) | Notice::Error(msg) => msg,
        }
    }

    fn style(&self) -> impl Fn(&Theme) -> Style + '_ {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(1));
            let palette = theme.palette();
            let tint = match self {
                Notice::Success(_) => palette.success,
                Notice::Info(_) => palette.primary,
                Notice::Error(_) => palette.danger,
            };
            style.background(Color { a: 0.25, ..tint })
        }
    }
}

pub fn notice<'a, Message: 'a>(notice: &'a Notice) -> Element<'a, Message> {
    container(text(notice.message()))
        .padding(8)
        .width(Length::Fill)
        .style(notice.style())
        .into()
}

/// Sidebar on the left, main content on the right
pub fn layout<'a, Message>(
    sidebar: impl Into<Element<'a, Message>>,
    main_content: impl Into<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    container(row![
        container(sidebar.into())
            .style(bordered_box)
            .padding(15)
            .height(Length::Fill)
            .width(Length::FillPortion(1)),
        container(main_content.into())
            .padding(15)
            .width(Length::FillPortion(4)),
    ])
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

/// One headline number with its caption
pub fn metric<'a, Message: 'a>(label: &'a str, value: String) -> Element<'a, Message> {
    container(column![text(label).size(14), text(value).size(28)].spacing(4))
        .style(bordered_box)
        .padding(10)
        .width(Length::Fill)
        .into()
}

pub fn image_panel<'a, Message: 'a>(handle: &Handle, caption: String) -> Element<'a, Message> {
    column![
        image(handle.clone()).width(Length::Fill),
        text(caption).size(14),
    ]
    .spacing(6)
    .width(Length::Fill)
    .into()
}

fn cell<'a, Message: 'a>(value: String) -> Element<'a, Message> {
    container(text(value).size(14))
        .width(Length::Fixed(COLUMN_WIDTH))
        .into()
}

/// Region table with statistics rounded to two decimals
pub fn region_table<'a, Message: 'a>(records: &[RegionRecord]) -> Element<'a, Message> {
    let header = row(crate::export::CSV_HEADER
        .iter()
        .map(|name| cell(name.to_string())));

    let rows = records.iter().map(RegionRecord::rounded).map(|r| -> Element<'a, Message> {
        row![
            cell(r.label.to_string()),
            cell(r.area.to_string()),
            cell(r.bbox_r0.to_string()),
            cell(r.bbox_c0.to_string()),
            cell(r.bbox_r1.to_string()),
            cell(r.bbox_c1.to_string()),
            cell(format!("{:.2}", r.mean)),
            cell(format!("{:.2}", r.median)),
            cell(format!("{:.2}", r.min)),
            cell(format!("{:.2}", r.max)),
        ]
        .into()
    });

    column![
        header,
        scrollable(Column::with_children(rows).spacing(2)).height(Length::Fixed(260.0)),
    ]
    .spacing(6)
    .into()
}
