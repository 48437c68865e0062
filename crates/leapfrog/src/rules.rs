//! Rules summary printed by `leapfrog rules`.

/// Plain-text rules.
pub const RULES: &str = "\
LEAPFROG

The board is N×N (3 to 9). Black starts in the upper-left triangle,
White in the lower-right one; the middle of the anti-diagonal is empty.
Black moves first.

On your turn, move one of your pieces:
  - one step in any of the eight directions onto an empty cell, or
  - a jump of two cells in a straight line over an adjacent enemy piece
    onto an empty cell. The jumped piece is captured.

If the piece that just captured can capture again from where it landed,
it must: the turn continues and only those captures are allowed.

You may pass instead of moving (which also abandons a capture chain).
The game ends when only one colour remains on the board.

Input: cells are a column letter and a row number, e.g. a1 or c3.
A move is two cells back to back (a1b2, a1c3). Type pass or press Enter
to pass, and quit (or q, exit) to leave the game.
";
