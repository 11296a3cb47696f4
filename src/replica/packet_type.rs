// The two payload-bearing frame kinds. Construction carries the one-time
// identity header before the common trailer; serialization starts at the
// trailer. Components may write different content for each.
#[derive(Copy, Debug, Clone, Eq, PartialEq)]
pub enum PacketType {
    Construction,
    Serialization,
}
