//! Static glyph-width tables for the two standard PDF faces the layout uses.
//!
//! Widths are in thousandths of an em, taken from the Adobe core font
//! metrics. Index = `(char as usize) - 32`, covering 0x20 (space) through
//! 0x7E (~). Characters outside ASCII fall back to a small table of common
//! WinAnsi punctuation, then to the width of a digit.

pub(crate) struct StandardMetrics {
    widths: [u16; 95],
    fallback: u16,
    /// Curly single quote, curly double quote.
    quotes: (u16, u16),
}

impl StandardMetrics {
    pub fn char_width(&self, c: char) -> u16 {
        let code = c as usize;
        if (32..=126).contains(&code) {
            return self.widths[code - 32];
        }
        match c {
            '\u{00A0}' => self.widths[0],
            '\u{2013}' | '\u{20AC}' => 556,
            '\u{2014}' | '\u{2026}' | '\u{2030}' => 1000,
            '\u{2018}' | '\u{2019}' | '\u{201A}' => self.quotes.0,
            '\u{201C}' | '\u{201D}' | '\u{201E}' => self.quotes.1,
            '\u{2022}' => 350,
            '\u{00B7}' => self.widths[14],
            // Dropped before drawing, so they take no room.
            '\u{200D}' | '\u{FE0E}' | '\u{FE0F}' => 0,
            _ => self.fallback,
        }
    }
}

#[rustfmt::skip]
pub(crate) static HELVETICA: StandardMetrics = StandardMetrics {
    widths: [
        //  sp    !    "    #    $    %    &    '
           278, 278, 355, 556, 556, 889, 667, 191,
        //  (    )    *    +    ,    -    .    /
           333, 333, 389, 584, 278, 333, 278, 278,
        //  0-9
           556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        //  :    ;    <    =    >    ?    @
           278, 278, 584, 584, 584, 556, 1015,
        //  A    B    C    D    E    F    G    H    I    J    K    L    M
           667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
        //  N    O    P    Q    R    S    T    U    V    W    X    Y    Z
           722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        //  [    \    ]    ^    _    `
           278, 278, 278, 469, 556, 333,
        //  a    b    c    d    e    f    g    h    i    j    k    l    m
           556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
        //  n    o    p    q    r    s    t    u    v    w    x    y    z
           556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
        //  {    |    }    ~
           334, 260, 334, 584,
    ],
    fallback: 556,
    quotes: (222, 333),
};

#[rustfmt::skip]
pub(crate) static HELVETICA_BOLD: StandardMetrics = StandardMetrics {
    widths: [
        //  sp    !    "    #    $    %    &    '
           278, 333, 474, 556, 556, 889, 722, 238,
        //  (    )    *    +    ,    -    .    /
           333, 333, 389, 584, 278, 333, 278, 278,
        //  0-9
           556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
        //  :    ;    <    =    >    ?    @
           333, 333, 584, 584, 584, 611, 975,
        //  A    B    C    D    E    F    G    H    I    J    K    L    M
           722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
        //  N    O    P    Q    R    S    T    U    V    W    X    Y    Z
           722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
        //  [    \    ]    ^    _    `
           333, 278, 333, 584, 556, 333,
        //  a    b    c    d    e    f    g    h    i    j    k    l    m
           556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
        //  n    o    p    q    r    s    t    u    v    w    x    y    z
           611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
        //  {    |    }    ~
           389, 280, 389, 584,
    ],
    fallback: 556,
    quotes: (278, 500),
};
