//! User-facing strings for each locale.

use duet_domain::Locale;

/// Static console text for one locale.
#[derive(Debug)]
pub struct Labels {
    pub banner_title: &'static str,
    pub banner_subtitle: &'static str,
    pub query: &'static str,
    pub fast_header: &'static str,
    pub deep_header: &'static str,
    pub waiting_fast: &'static str,
    pub done: &'static str,
    pub repl_hint: &'static str,
    pub repl_prompt: &'static str,
    pub goodbye: &'static str,
    pub batch_intro: &'static str,
    pub batch_step: &'static str,
    pub batch_pause: &'static str,
}

const KOREAN: Labels = Labels {
    banner_title: "🤖 Amazon Nova 듀얼 모델 챗봇",
    banner_subtitle: "빠른 모델과 정밀한 모델을 함께 사용해 빠르고 정확한 답변을 제공합니다.",
    query: "💬 사용자 질문:",
    fast_header: "🚀 [초기 응답]",
    deep_header: "📚 [상세 답변]",
    waiting_fast: "초기 응답 생성 중...",
    done: "✅ 응답 완료!",
    repl_hint: "💡 질문을 입력하세요 (종료하려면 'quit' 입력)",
    repl_prompt: "🙋 질문",
    goodbye: "👋 챗봇을 종료합니다.",
    batch_intro: "🧪 테스트 모드: 준비된 질문으로 테스트합니다.",
    batch_step: "📝 테스트",
    batch_pause: "⏸️  다음 테스트로 진행하려면 Enter를 누르세요...",
};

const ENGLISH: Labels = Labels {
    banner_title: "🤖 Amazon Nova dual-model chatbot",
    banner_subtitle: "A fast model and a thorough model answer together.",
    query: "💬 Question:",
    fast_header: "🚀 [Initial response]",
    deep_header: "📚 [Detailed answer]",
    waiting_fast: "Preparing initial response...",
    done: "✅ Done!",
    repl_hint: "💡 Type a question ('quit' to exit)",
    repl_prompt: "🙋 Question",
    goodbye: "👋 Goodbye.",
    batch_intro: "🧪 Batch mode: running the sample questions.",
    batch_step: "📝 Query",
    batch_pause: "⏸️  Press Enter to continue...",
};

impl Labels {
    pub fn for_locale(locale: Locale) -> &'static Labels {
        match locale {
            Locale::Korean => &KOREAN,
            Locale::English => &ENGLISH,
        }
    }
}
