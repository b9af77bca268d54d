//! Settings schema: every user-configurable knob of the keyboard widget.
//!
//! Stored blobs use camelCase field names so that settings written by older
//! frontends deserialize unchanged. Every section and field carries a
//! default, which is what makes the deep merge in [`super::merge`] able to
//! recover partially corrupted blobs.

use serde::{Deserialize, Serialize};

use crate::types::Layout;

use super::theme::ThemeSettings;

/// Root settings object persisted as a single JSON blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub version: SchemaVersion,
    pub theme: ThemeSettings,
    pub layout: LayoutSettings,
    pub behavior: BehaviorSettings,
    pub sound: SoundSettings,
    pub keyboard_layout: KeyboardLayoutSettings,
    pub mobile: MobileSettings,
    pub accessibility: AccessibilitySettings,
    pub typography: TypographySettings,
    pub data: DataSettings,
    pub advanced: AdvancedSettings,
}

/// Settings schema version; bumped when the blob shape changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaVersion(pub String);

impl Default for SchemaVersion {
    fn default() -> Self {
        Self("1.0.0".to_string())
    }
}

// ---------------------------------------------------------------------------
// Layout (geometry) settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyboardScale {
    Small,
    Medium,
    Large,
    Xl,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeySize {
    Compact,
    Normal,
    Large,
    TouchOptimized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeySpacing {
    None,
    Tight,
    Normal,
    Loose,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RowSpacing {
    Tight,
    Normal,
    Loose,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyboardPosition {
    BottomCenter,
    BottomLeft,
    BottomRight,
    TopCenter,
    TopLeft,
    TopRight,
    Floating,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectSize {
    None,
    Small,
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderRadius {
    None,
    Small,
    Medium,
    Large,
    Xl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideAnimationType {
    Slide,
    Fade,
    Scale,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyPressAnimation {
    None,
    Ripple,
    ScaleDown,
    Glow,
    All,
}

/// Pixel offset from the top-left corner for a floating keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct FloatingPosition {
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutSettings {
    pub scale: KeyboardScale,
    pub custom_width: Option<u32>,

    pub key_size: KeySize,
    pub key_spacing: KeySpacing,
    pub row_spacing: RowSpacing,

    pub position: KeyboardPosition,
    pub floating_position: Option<FloatingPosition>,

    pub hover_effect: EffectSize,
    pub key_shadow: EffectSize,
    pub border_radius: BorderRadius,

    pub slide_animation: bool,
    pub slide_animation_duration: u32,
    pub slide_animation_type: SlideAnimationType,
    pub key_press_animation: KeyPressAnimation,

    pub z_index_overlay: i32,
    pub z_index_keyboard: i32,
    pub z_index_button: i32,

    pub full_screen_mobile: bool,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            scale: KeyboardScale::Small,
            custom_width: None,
            key_size: KeySize::Normal,
            key_spacing: KeySpacing::Normal,
            row_spacing: RowSpacing::Normal,
            position: KeyboardPosition::BottomCenter,
            floating_position: None,
            hover_effect: EffectSize::Medium,
            key_shadow: EffectSize::Large,
            border_radius: BorderRadius::Medium,
            slide_animation: true,
            slide_animation_duration: 500,
            slide_animation_type: SlideAnimationType::Slide,
            key_press_animation: KeyPressAnimation::None,
            z_index_overlay: 30,
            z_index_keyboard: 40,
            z_index_button: 50,
            full_screen_mobile: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Behavior settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpaceKeyAction {
    InsertSpace,
    CompleteWord,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeMode {
    None,
    Vertical,
    Horizontal,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirectionMode {
    Rtl,
    Ltr,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BehaviorSettings {
    pub auto_hide_on_blur: bool,
    pub auto_hide_delay: u32,
    pub auto_show_on_focus: bool,
    pub hide_on_word_complete: bool,
    pub click_outside_to_close: bool,

    pub shift_auto_reset: bool,
    pub shift_toggle_mode: bool,
    pub ctrl_auto_reset: bool,
    pub ctrl_toggle_mode: bool,
    pub sticky_keys: bool,

    pub clear_on_submit: bool,
    pub space_key_action: SpaceKeyAction,
    pub auto_capitalize: bool,
    /// Maximum composing length in characters; 0 means unlimited.
    pub max_text_length: usize,

    pub textarea_rows: u32,
    pub textarea_auto_expand: bool,
    pub textarea_resize: ResizeMode,
    pub placeholder_text: String,
    pub text_direction: TextDirectionMode,
}

impl Default for BehaviorSettings {
    fn default() -> Self {
        Self {
            auto_hide_on_blur: false,
            auto_hide_delay: 200,
            auto_show_on_focus: false,
            hide_on_word_complete: false,
            click_outside_to_close: true,
            shift_auto_reset: true,
            shift_toggle_mode: false,
            ctrl_auto_reset: true,
            ctrl_toggle_mode: false,
            sticky_keys: false,
            clear_on_submit: true,
            space_key_action: SpaceKeyAction::InsertSpace,
            auto_capitalize: false,
            max_text_length: 0,
            textarea_rows: 1,
            textarea_auto_expand: false,
            textarea_resize: ResizeMode::None,
            placeholder_text: "اكتب هنا...".to_string(),
            text_direction: TextDirectionMode::Rtl,
        }
    }
}

// ---------------------------------------------------------------------------
// Sound and haptics settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HapticIntensity {
    None,
    Light,
    Medium,
    Strong,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SoundSettings {
    /// Master toggle over every sound.
    pub sound_enabled: bool,
    /// 0-100, scales all per-sound volumes.
    pub master_volume: u8,

    pub click_sound_enabled: bool,
    pub click_sound_volume: u8,

    pub open_close_sound_enabled: bool,
    pub open_close_sound_volume: u8,

    pub haptic_feedback: bool,
    pub haptic_key_press: HapticIntensity,
    /// Base vibration duration in milliseconds.
    pub haptic_key_press_duration: u64,
    pub haptic_open_close: HapticIntensity,
}

impl Default for SoundSettings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            master_volume: 80,
            click_sound_enabled: true,
            click_sound_volume: 40,
            open_close_sound_enabled: true,
            open_close_sound_volume: 70,
            haptic_feedback: false,
            haptic_key_press: HapticIntensity::None,
            haptic_key_press_duration: 10,
            haptic_open_close: HapticIntensity::None,
        }
    }
}

// ---------------------------------------------------------------------------
// Keyboard layout selection settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LayoutKind {
    #[serde(rename = "KBDA1")]
    Kbda1,
    #[serde(rename = "KBDA2")]
    Kbda2,
    #[serde(rename = "AZERTY")]
    Azerty,
    #[serde(rename = "QWERTY")]
    Qwerty,
    #[serde(rename = "custom")]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhysicalKeyMapping {
    Phonetic,
    Positional,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TashkeelVisibility {
    Always,
    ShiftOnly,
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EnglishCharacterVisibility {
    None,
    SymbolsOnly,
    Full,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct KeyboardLayoutSettings {
    pub layout: LayoutKind,
    pub custom_layout: Option<Layout>,

    pub enable_layout_switching: bool,

    pub enable_physical_keyboard: bool,
    pub physical_key_mapping: PhysicalKeyMapping,
    pub show_keyboard_on_physical_key: bool,

    pub show_tashkeel_keys: TashkeelVisibility,
    pub show_numbers: bool,
    pub show_english_characters: EnglishCharacterVisibility,
    pub show_alif_variants: bool,
}

impl Default for KeyboardLayoutSettings {
    fn default() -> Self {
        Self {
            layout: LayoutKind::Kbda1,
            custom_layout: None,
            enable_layout_switching: false,
            enable_physical_keyboard: false,
            physical_key_mapping: PhysicalKeyMapping::Positional,
            show_keyboard_on_physical_key: true,
            show_tashkeel_keys: TashkeelVisibility::ShiftOnly,
            show_numbers: true,
            show_english_characters: EnglishCharacterVisibility::SymbolsOnly,
            show_alif_variants: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Mobile settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TouchFeedback {
    None,
    Highlight,
    Scale,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LongPressAction {
    None,
    ShowAltChars,
    ContextMenu,
    CopyKey,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SwipeDirection {
    Down,
    Up,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MobileSettings {
    pub touch_feedback: TouchFeedback,
    pub touch_area_padding: EffectSize,
    pub long_press_action: LongPressAction,
    pub long_press_duration: u32,

    pub swipe_to_hide: bool,
    pub swipe_direction: SwipeDirection,
    pub pinch_to_resize: bool,
}

impl Default for MobileSettings {
    fn default() -> Self {
        Self {
            touch_feedback: TouchFeedback::Both,
            touch_area_padding: EffectSize::Medium,
            long_press_action: LongPressAction::None,
            long_press_duration: 500,
            swipe_to_hide: false,
            swipe_direction: SwipeDirection::Down,
            pinch_to_resize: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Accessibility settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AriaLabelMode {
    Full,
    Partial,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FocusIndicator {
    None,
    Default,
    Enhanced,
    Custom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AccessibilitySettings {
    pub aria_labels: AriaLabelMode,
    pub announce_key_presses: bool,

    pub tab_navigation: bool,
    pub arrow_key_navigation: bool,
    pub focus_indicator: FocusIndicator,
    pub focus_indicator_color: Option<String>,

    pub auto_detect_high_contrast: bool,
    pub force_high_contrast: bool,

    pub respect_system_font_size: bool,
    pub minimum_font_size: u32,
}

impl Default for AccessibilitySettings {
    fn default() -> Self {
        Self {
            aria_labels: AriaLabelMode::Full,
            announce_key_presses: false,
            tab_navigation: true,
            arrow_key_navigation: true,
            focus_indicator: FocusIndicator::Enhanced,
            focus_indicator_color: Some("#3b82f6".to_string()),
            auto_detect_high_contrast: true,
            force_high_contrast: false,
            respect_system_font_size: false,
            minimum_font_size: 14,
        }
    }
}

// ---------------------------------------------------------------------------
// Typography settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontFamily {
    #[serde(rename = "Amiri")]
    Amiri,
    #[serde(rename = "Noto Sans Arabic")]
    NotoSansArabic,
    #[serde(rename = "Scheherazade New")]
    ScheherazadeNew,
    #[serde(rename = "Traditional Arabic")]
    TraditionalArabic,
    #[serde(rename = "custom")]
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    Small,
    Medium,
    Large,
    Xl,
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    Normal,
    Medium,
    Semibold,
    Bold,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TypographySettings {
    pub font_family: FontFamily,
    pub custom_font_family: Option<String>,
    pub custom_font_url: Option<String>,

    pub key_font_size: FontSize,
    pub key_font_size_custom: Option<u32>,
    pub input_font_size: FontSize,
    pub input_font_size_custom: Option<u32>,

    pub key_font_weight: FontWeight,
    pub special_key_font_weight: FontWeight,
}

impl Default for TypographySettings {
    fn default() -> Self {
        Self {
            font_family: FontFamily::Amiri,
            custom_font_family: None,
            custom_font_url: None,
            key_font_size: FontSize::Large,
            key_font_size_custom: None,
            input_font_size: FontSize::Xl,
            input_font_size_custom: None,
            key_font_weight: FontWeight::Medium,
            special_key_font_weight: FontWeight::Bold,
        }
    }
}

// ---------------------------------------------------------------------------
// Data settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SaveLocation {
    #[serde(rename = "localStorage")]
    LocalStorage,
    #[serde(rename = "sessionStorage")]
    SessionStorage,
    #[serde(rename = "none")]
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DataSettings {
    pub save_location: SaveLocation,
    pub auto_save: bool,

    pub save_typed_words: bool,
    pub max_history_items: usize,
    pub word_suggestions_from_history: bool,

    pub clear_history_on_exit: bool,
    /// 0 means never.
    pub clear_history_after_days: u32,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            save_location: SaveLocation::LocalStorage,
            auto_save: true,
            save_typed_words: false,
            max_history_items: 100,
            word_suggestions_from_history: false,
            clear_history_on_exit: false,
            clear_history_after_days: 30,
        }
    }
}

// ---------------------------------------------------------------------------
// Advanced settings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationPerformance {
    High,
    Balanced,
    Performance,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdvancedSettings {
    pub animation_performance: AnimationPerformance,
    pub debounce_key_press: bool,
    pub debounce_delay: u32,

    pub debug_mode: bool,
    pub log_events: bool,
    pub show_performance_metrics: bool,

    pub custom_css_classes: bool,
    pub custom_css_overrides: Option<String>,
}

impl Default for AdvancedSettings {
    fn default() -> Self {
        Self {
            animation_performance: AnimationPerformance::High,
            debounce_key_press: false,
            debounce_delay: 0,
            debug_mode: false,
            log_events: false,
            show_performance_metrics: false,
            custom_css_classes: false,
            custom_css_overrides: None,
        }
    }
}
