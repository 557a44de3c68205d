use super::endgame::Endgame;
use crate::ENDGAME_DECK;
use crate::MAX_PLAYERS;
use crate::cards::Card;
use crate::cards::Colour;

/// Key is the memo key of a canonical Endgame: an explicit byte image
/// of every field that can influence the rest of the game.
/// the turn counter is left out.
///
/// ```text
/// [00]      layout version
/// [01..07]  players, current, hints, bombs, deck size, actions left (0xFF = not started)
/// [07..12]  played, by colour
/// [12..37]  discard counts, by card index 1..=25
/// [37..57]  hands, little-endian u32 per seat
/// [57..62]  deck cards, padded with the empty card
/// [62..64]  zero
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Key([u8; 64]);

impl Key {
    pub const VERSION: u8 = 1;
    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

impl From<&Endgame> for Key {
    fn from(endgame: &Endgame) -> Self {
        let mut bytes = [0u8; 64];
        let mut cursor = 0;
        let mut put = |byte: u8| {
            bytes[cursor] = byte;
            cursor += 1;
        };
        put(Self::VERSION);
        put(endgame.players() as u8);
        put(endgame.current() as u8);
        put(endgame.hints());
        put(endgame.bombs());
        put(endgame.deck_size() as u8);
        put(endgame.actions_left().unwrap_or(u8::MAX));
        Colour::all()
            .into_iter()
            .for_each(|c| put(endgame.played().get(c)));
        Card::unique()
            .into_iter()
            .for_each(|c| put(endgame.discarded().count(c) as u8));
        (0..MAX_PLAYERS)
            .flat_map(|seat| u32::from(endgame.hand(seat)).to_le_bytes())
            .for_each(&mut put);
        (0..ENDGAME_DECK)
            .map(|i| u8::from(endgame.deck[i]))
            .for_each(&mut put);
        Self(bytes)
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for byte in self.0.iter() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}
