pub mod bullet_item;
pub mod heading;
pub mod paragraph;

pub use bullet_item::BulletItem;
pub use heading::Heading;
pub use paragraph::Paragraph;
