//! Tab names and feature descriptions, English and Chinese

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoTab {
    Shapes,
    Text,
    Colors,
    Input,
    Animation,
    ThreeD,
}

impl DemoTab {
    pub const ALL: [DemoTab; 6] = [
        DemoTab::Shapes,
        DemoTab::Text,
        DemoTab::Colors,
        DemoTab::Input,
        DemoTab::Animation,
        DemoTab::ThreeD,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Tab at `index`, wrapping in both directions
    pub fn from_index(index: isize) -> DemoTab {
        let len = Self::ALL.len() as isize;
        Self::ALL[index.rem_euclid(len) as usize]
    }

    pub fn next(self) -> DemoTab {
        Self::from_index(self.index() as isize + 1)
    }

    pub fn prev(self) -> DemoTab {
        Self::from_index(self.index() as isize - 1)
    }

    pub fn name_en(self) -> &'static str {
        match self {
            DemoTab::Shapes => "Shapes",
            DemoTab::Text => "Text",
            DemoTab::Colors => "Colors",
            DemoTab::Input => "Input",
            DemoTab::Animation => "Animation",
            DemoTab::ThreeD => "3D",
        }
    }

    pub fn name_cn(self) -> &'static str {
        match self {
            DemoTab::Shapes => "图形",
            DemoTab::Text => "文本",
            DemoTab::Colors => "颜色",
            DemoTab::Input => "输入",
            DemoTab::Animation => "动画",
            DemoTab::ThreeD => "3D",
        }
    }

    pub fn feature(self) -> &'static FeatureText {
        &FEATURES[self.index()]
    }
}

/// Description shown in the info panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureText {
    pub name_en: &'static str,
    pub name_cn: &'static str,
    pub desc_en: &'static str,
    pub desc_cn: &'static str,
    pub usage_en: &'static str,
    pub usage_cn: &'static str,
}

pub const FEATURES: [FeatureText; 6] = [
    FeatureText {
        name_en: "2D Shapes Drawing",
        name_cn: "2D 图形绘制",
        desc_en: "Draw various geometric shapes with colors and outlines",
        desc_cn: "绘制各种几何图形，支持颜色填充和轮廓",
        usage_en: "Circles, rectangles, lines, polygons, rings",
        usage_cn: "圆形、矩形、线条、多边形、圆环",
    },
    FeatureText {
        name_en: "Text Rendering",
        name_cn: "文本渲染",
        desc_en: "Display text in different sizes, colors and styles",
        desc_cn: "使用不同大小、颜色和样式显示文本",
        usage_en: "Multiple sizes, colors, animated text, glyph coverage",
        usage_cn: "多种大小、颜色、动画文本、字形覆盖",
    },
    FeatureText {
        name_en: "Colors & Gradients",
        name_cn: "颜色与渐变",
        desc_en: "Work with colors, blending and gradient effects",
        desc_cn: "处理颜色、混合和渐变效果",
        usage_en: "Color manipulation, gradients, transparency",
        usage_cn: "颜色处理、渐变、透明度",
    },
    FeatureText {
        name_en: "Input Handling",
        name_cn: "输入处理",
        desc_en: "Mouse and keyboard input detection",
        desc_cn: "鼠标和键盘输入检测",
        usage_en: "Mouse position, clicks, key presses, real-time interaction",
        usage_cn: "鼠标位置、点击、按键、实时交互",
    },
    FeatureText {
        name_en: "Animation & Particles",
        name_cn: "动画与粒子",
        desc_en: "Create dynamic animations and particle effects",
        desc_cn: "创建动态动画和粒子效果",
        usage_en: "Smooth transitions, particle systems, visual effects",
        usage_cn: "平滑过渡、粒子系统、视觉效果",
    },
    FeatureText {
        name_en: "3D Graphics",
        name_cn: "3D 图形",
        desc_en: "Basic 3D rendering and camera control",
        desc_cn: "基础 3D 渲染和摄像机控制",
        usage_en: "3D models, lighting, camera, transformations",
        usage_cn: "3D 模型、光照、摄像机、变换",
    },
];

pub const APP_TITLE: &str = "Features Demo 特性演示";
pub const INFO_HINT: &str = "Press I for info";
pub const INFO_HINT_TOUCH: &str = "Double tap for info";
/// Multilingual line used to exercise glyph coverage
pub const UNICODE_SAMPLE: &str = "Unicode: 中文 日本語 한국어 Русский";
