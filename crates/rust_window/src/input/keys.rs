//! Keyboard key and mouse button identities
//!
//! Codes follow GLFW's numbering so the platform layer can convert with a
//! plain integer lookup.

macro_rules! keyboard_keys {
    ($($name:ident = $code:literal,)*) => {
        /// Keyboard keys, identified by their GLFW key code
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(i32)]
        pub enum KeyboardKey {
            /// A key the platform reported without a known code
            Unknown = -1,
            $(
                #[doc = concat!("`", stringify!($name), "` key")]
                $name = $code,
            )*
        }

        impl KeyboardKey {
            /// Every identifiable key, in ascending code order
            pub const ALL: &'static [KeyboardKey] = &[$(KeyboardKey::$name,)*];

            /// Look up a key from its GLFW key code
            ///
            /// Codes without a matching key map to [`KeyboardKey::Unknown`].
            pub const fn from_code(code: i32) -> Self {
                match code {
                    $($code => KeyboardKey::$name,)*
                    _ => KeyboardKey::Unknown,
                }
            }
        }
    };
}

keyboard_keys! {
    Space = 32,
    Apostrophe = 39,
    Comma = 44,
    Minus = 45,
    Period = 46,
    Slash = 47,
    Num0 = 48,
    Num1 = 49,
    Num2 = 50,
    Num3 = 51,
    Num4 = 52,
    Num5 = 53,
    Num6 = 54,
    Num7 = 55,
    Num8 = 56,
    Num9 = 57,
    Semicolon = 59,
    Equal = 61,
    A = 65,
    B = 66,
    C = 67,
    D = 68,
    E = 69,
    F = 70,
    G = 71,
    H = 72,
    I = 73,
    J = 74,
    K = 75,
    L = 76,
    M = 77,
    N = 78,
    O = 79,
    P = 80,
    Q = 81,
    R = 82,
    S = 83,
    T = 84,
    U = 85,
    V = 86,
    W = 87,
    X = 88,
    Y = 89,
    Z = 90,
    LeftBracket = 91,
    Backslash = 92,
    RightBracket = 93,
    GraveAccent = 96,
    World1 = 161,
    World2 = 162,
    Escape = 256,
    Enter = 257,
    Tab = 258,
    Backspace = 259,
    Insert = 260,
    Delete = 261,
    Right = 262,
    Left = 263,
    Down = 264,
    Up = 265,
    PageUp = 266,
    PageDown = 267,
    Home = 268,
    End = 269,
    CapsLock = 280,
    ScrollLock = 281,
    NumLock = 282,
    PrintScreen = 283,
    Pause = 284,
    F1 = 290,
    F2 = 291,
    F3 = 292,
    F4 = 293,
    F5 = 294,
    F6 = 295,
    F7 = 296,
    F8 = 297,
    F9 = 298,
    F10 = 299,
    F11 = 300,
    F12 = 301,
    F13 = 302,
    F14 = 303,
    F15 = 304,
    F16 = 305,
    F17 = 306,
    F18 = 307,
    F19 = 308,
    F20 = 309,
    F21 = 310,
    F22 = 311,
    F23 = 312,
    F24 = 313,
    F25 = 314,
    Kp0 = 320,
    Kp1 = 321,
    Kp2 = 322,
    Kp3 = 323,
    Kp4 = 324,
    Kp5 = 325,
    Kp6 = 326,
    Kp7 = 327,
    Kp8 = 328,
    Kp9 = 329,
    KpDecimal = 330,
    KpDivide = 331,
    KpMultiply = 332,
    KpSubtract = 333,
    KpAdd = 334,
    KpEnter = 335,
    KpEqual = 336,
    LeftShift = 340,
    LeftControl = 341,
    LeftAlt = 342,
    LeftSuper = 343,
    RightShift = 344,
    RightControl = 345,
    RightAlt = 346,
    RightSuper = 347,
    Menu = 348,
}

impl KeyboardKey {
    /// The highest key code GLFW reports
    pub const LAST: KeyboardKey = KeyboardKey::Menu;

    /// GLFW key code for this key
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Mouse buttons, identified by their GLFW button index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum MouseButton {
    /// Button 1, usually the left button
    Button1 = 0,
    /// Button 2, usually the right button
    Button2 = 1,
    /// Button 3, usually the middle button
    Button3 = 2,
    /// Button 4
    Button4 = 3,
    /// Button 5
    Button5 = 4,
    /// Button 6
    Button6 = 5,
    /// Button 7
    Button7 = 6,
    /// Button 8
    Button8 = 7,
}

impl MouseButton {
    /// Left mouse button
    pub const LEFT: MouseButton = MouseButton::Button1;
    /// Right mouse button
    pub const RIGHT: MouseButton = MouseButton::Button2;
    /// Middle mouse button
    pub const MIDDLE: MouseButton = MouseButton::Button3;

    /// Every button, in ascending index order
    pub const ALL: [MouseButton; 8] = [
        MouseButton::Button1,
        MouseButton::Button2,
        MouseButton::Button3,
        MouseButton::Button4,
        MouseButton::Button5,
        MouseButton::Button6,
        MouseButton::Button7,
        MouseButton::Button8,
    ];

    /// Look up a button from its GLFW index
    pub fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// GLFW index for this button
    pub const fn code(self) -> i32 {
        self as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes_match_glfw() {
        assert_eq!(KeyboardKey::Space.code(), 32);
        assert_eq!(KeyboardKey::A.code(), 65);
        assert_eq!(KeyboardKey::Escape.code(), 256);
        assert_eq!(KeyboardKey::LeftControl.code(), 341);
        assert_eq!(KeyboardKey::LAST.code(), 348);
    }

    #[test]
    fn test_key_from_code() {
        for &key in KeyboardKey::ALL {
            assert_eq!(KeyboardKey::from_code(key.code()), key);
        }
        assert_eq!(KeyboardKey::from_code(-1), KeyboardKey::Unknown);
        assert_eq!(KeyboardKey::from_code(33), KeyboardKey::Unknown);
        assert_eq!(KeyboardKey::from_code(1000), KeyboardKey::Unknown);
    }

    #[test]
    fn test_key_list_is_sorted() {
        assert!(KeyboardKey::ALL.windows(2).all(|pair| pair[0].code() < pair[1].code()));
    }

    #[test]
    fn test_mouse_button_from_code() {
        assert_eq!(MouseButton::from_code(0), Some(MouseButton::LEFT));
        assert_eq!(MouseButton::from_code(1), Some(MouseButton::RIGHT));
        assert_eq!(MouseButton::from_code(2), Some(MouseButton::MIDDLE));
        assert_eq!(MouseButton::from_code(7), Some(MouseButton::Button8));
        assert_eq!(MouseButton::from_code(8), None);
        assert_eq!(MouseButton::from_code(-1), None);
    }
}
