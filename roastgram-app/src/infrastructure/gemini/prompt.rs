use crate::domain::{display_value, Biodata, Language};

/// Turns profile attributes into one `Label: value` line per entry.
///
/// Underscores in keys become spaces and the first character is upper-cased.
/// Values are written verbatim, newlines and colons included.
pub fn format_biodata(biodata: &Biodata) -> String {
    let mut text = String::new();
    for (key, value) in biodata.iter() {
        text.push_str(&title_case(&key.replace('_', " ")));
        text.push_str(": ");
        text.push_str(&display_value(value));
        text.push('\n');
    }
    text
}

fn title_case(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn build_roast_prompt(username: &str, language: Language, biodata_text: &str) -> String {
    let (template, instruction) = match language {
        Language::Indonesian => (
            format!(
                "Berikan roasting singkat dengan kejam, menyindir, serta menyakitkan dalam bahasa gaul untuk profile Instagram berikut : {username}. Berikut detailnya: {biodata_text}"
            ),
            "(berikan response dalam bahasa indonesia dan jangan berikan pujian atau saran)",
        ),
        Language::English => (
            format!(
                "Give a short, brutal, sarcastic and hurtful roast in slang for the following Instagram profile: {username}. Here are the details: {biodata_text}"
            ),
            "(respond in English and do not give any compliments or advice)",
        ),
        Language::Mandarin => (
            format!(
                "用网络俚语对以下Instagram个人资料进行简短、残酷、讽刺且刺痛人心的吐槽：{username}。详细信息如下：{biodata_text}"
            ),
            "（请用中文回答，不要给出任何赞美或建议）",
        ),
        Language::Japanese => (
            format!(
                "次のInstagramプロフィールに対して、スラングを使って短く、容赦なく、皮肉たっぷりで痛烈なローストをしてください：{username}。詳細は以下の通りです：{biodata_text}"
            ),
            "（日本語で回答し、褒め言葉やアドバイスは一切しないでください）",
        ),
        Language::Korean => (
            format!(
                "다음 인스타그램 프로필에 대해 속어를 사용해서 짧고 잔인하고 비꼬는, 뼈 때리는 로스팅을 해줘: {username}. 자세한 정보는 다음과 같아: {biodata_text}"
            ),
            "(한국어로 답변하고 칭찬이나 조언은 절대 하지 마)",
        ),
        Language::Vietnamese => (
            format!(
                "Hãy roast thật ngắn gọn, tàn nhẫn, mỉa mai và đau đớn bằng tiếng lóng cho hồ sơ Instagram sau: {username}. Đây là thông tin chi tiết: {biodata_text}"
            ),
            "(trả lời bằng tiếng Việt và không được khen ngợi hay đưa ra lời khuyên)",
        ),
        Language::Filipino => (
            format!(
                "Magbigay ng maikli, brutal, sarkastiko at masakit na roast gamit ang slang para sa sumusunod na Instagram profile: {username}. Narito ang mga detalye: {biodata_text}"
            ),
            "(sumagot sa wikang Filipino at huwag magbigay ng anumang papuri o payo)",
        ),
    };

    template + instruction
}
