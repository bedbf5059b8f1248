//! 내장 KSL 사전 데이터
//!
//! 한국어 표면형 -> KSL 글로스 토큰

pub(crate) const BUILTIN_ENTRIES: &[(&str, &str)] = &[
    // 인사/기본 표현
    ("안녕하세요", "안녕"),
    ("안녕", "안녕"),
    ("감사합니다", "감사"),
    ("감사", "감사"),
    ("죄송합니다", "죄송"),
    ("죄송", "죄송"),
    ("네", "네"),
    ("아니요", "아니요"),
    ("안녕히", "안녕히"),
    ("반갑습니다", "반갑다"),
    ("반갑다", "반갑다"),
    ("고맙습니다", "고맙다"),
    ("고맙다", "고맙다"),
    // 장소
    ("학교", "학교"),
    ("집", "집"),
    ("병원", "병원"),
    ("식당", "식당"),
    ("회사", "회사"),
    ("가게", "가게"),
    ("은행", "은행"),
    ("역", "역"),
    ("공원", "공원"),
    ("도서관", "도서관"),
    ("카페", "카페"),
    ("마트", "마트"),
    ("놀이터", "놀이터"),
    // 시간
    ("오늘", "오늘"),
    ("내일", "내일"),
    ("어제", "어제"),
    ("지금", "지금"),
    ("나중에", "나중에"),
    ("아침", "아침"),
    ("점심", "점심"),
    ("저녁", "저녁"),
    ("오전", "오전"),
    ("오후", "오후"),
    ("주말", "주말"),
    ("시", "시"),
    ("분", "분"),
    ("몇", "몇"),
    // 동작
    ("가다", "가다"),
    ("오다", "오다"),
    ("먹다", "먹다"),
    ("마시다", "마시다"),
    ("자다", "자다"),
    ("일하다", "일하다"),
    ("공부하다", "공부하다"),
    ("만나다", "만나다"),
    ("주다", "주다"),
    ("받다", "받다"),
    ("사다", "사다"),
    ("보다", "보다"),
    ("듣다", "듣다"),
    ("말하다", "말하다"),
    ("말씀하다", "말하다"),
    ("하다", "하다"),
    ("배우다", "배우다"),
    ("보여주다", "보여주다"),
    ("도와주다", "도와주다"),
    ("신고하다", "신고하다"),
    ("필요하다", "필요하다"),
    ("산책하다", "산책하다"),
    ("이해하다", "이해하다"),
    ("드시다", "먹다"),
    // 의문사
    ("어디", "어디"),
    ("언제", "언제"),
    ("무엇", "무엇"),
    ("뭐", "무엇"),
    ("누구", "누구"),
    ("왜", "왜"),
    ("어떻게", "어떻게"),
    // 형용사
    ("좋다", "좋다"),
    ("나쁘다", "나쁘다"),
    ("크다", "크다"),
    ("작다", "작다"),
    ("많다", "많다"),
    ("적다", "적다"),
    ("빠르다", "빠르다"),
    ("느리다", "느리다"),
    ("재미있다", "재미있다"),
    ("어렵다", "어렵다"),
    ("쉽다", "쉽다"),
    ("맛있다", "맛있다"),
    // 사람/대명사
    ("사람", "사람"),
    ("저", "저"),
    ("나", "나"),
    ("저는", "저"),
    ("나는", "나"),
    ("언니", "언니"),
    ("친구", "친구"),
    ("가족", "가족"),
    ("선생님", "선생님"),
    // 기타
    ("선물", "선물"),
    ("빵", "빵"),
    ("날씨", "날씨"),
    ("수화", "수화"),
    ("도움", "도움"),
    ("예정", "예정"),
    ("정말", "정말"),
    ("천천히", "천천히"),
    ("다시", "다시"),
    ("한번", "한번"),
    ("함께", "함께"),
];
