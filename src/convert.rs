use std::collections::HashMap;

/// Embedded simplified → traditional character table.
///
/// Curated for character-by-character conversion: every entry maps one
/// character to one character, and no traditional form appears on the left
/// side, so converting already-converted text is a no-op. Characters whose
/// traditional form depends on context (后/後, 里/裏, 干/幹, 体/體, ...)
/// are deliberately left out rather than guessed.
const S2T_PAIRS: &[(char, char)] = &[
    ('这', '這'), ('说', '說'), ('对', '對'), ('开', '開'), ('关', '關'),
    ('门', '門'), ('问', '問'), ('间', '間'), ('们', '們'), ('来', '來'),
    ('时', '時'), ('会', '會'), ('学', '學'), ('习', '習'), ('长', '長'),
    ('东', '東'), ('车', '車'), ('书', '書'), ('见', '見'), ('风', '風'),
    ('马', '馬'), ('鸟', '鳥'), ('鱼', '魚'), ('龙', '龍'), ('写', '寫'),
    ('读', '讀'), ('话', '話'), ('语', '語'), ('让', '讓'), ('进', '進'),
    ('远', '遠'), ('运', '運'), ('还', '還'), ('边', '邊'), ('过', '過'),
    ('达', '達'), ('迁', '遷'), ('选', '選'), ('适', '適'), ('递', '遞'),
    ('逻', '邏'), ('遗', '遺'), ('导', '導'), ('寻', '尋'), ('专', '專'),
    ('传', '傳'), ('转', '轉'), ('轻', '輕'), ('辆', '輛'), ('较', '較'),
    ('辅', '輔'), ('轮', '輪'), ('软', '軟'), ('载', '載'), ('医', '醫'),
    ('酱', '醬'), ('释', '釋'), ('钱', '錢'), ('铁', '鐵'), ('银', '銀'),
    ('错', '錯'), ('锁', '鎖'), ('镜', '鏡'), ('针', '針'), ('钢', '鋼'),
    ('铜', '銅'), ('铃', '鈴'), ('链', '鏈'), ('销', '銷'), ('锋', '鋒'),
    ('录', '錄'), ('键', '鍵'), ('镇', '鎮'), ('闪', '閃'), ('闭', '閉'),
    ('闻', '聞'), ('阅', '閱'), ('阳', '陽'), ('阴', '陰'), ('陈', '陳'),
    ('际', '際'), ('陆', '陸'), ('队', '隊'), ('阶', '階'), ('隐', '隱'),
    ('难', '難'), ('雾', '霧'), ('电', '電'), ('韦', '韋'), ('页', '頁'),
    ('顶', '頂'), ('顺', '順'), ('须', '須'), ('顾', '顧'), ('顿', '頓'),
    ('颁', '頒'), ('颂', '頌'), ('预', '預'), ('领', '領'), ('颇', '頗'),
    ('频', '頻'), ('题', '題'), ('颜', '顏'), ('额', '額'), ('飞', '飛'),
    ('饭', '飯'), ('饮', '飲'), ('饺', '餃'), ('饱', '飽'), ('饿', '餓'),
    ('馆', '館'), ('驱', '驅'), ('驶', '駛'), ('驻', '駐'), ('驾', '駕'),
    ('验', '驗'), ('骑', '騎'), ('骗', '騙'), ('鲁', '魯'), ('鲜', '鮮'),
    ('鸡', '雞'), ('鸣', '鳴'), ('鸭', '鴨'), ('鸿', '鴻'), ('鹅', '鵝'),
    ('鹤', '鶴'), ('麦', '麥'), ('黄', '黃'), ('齐', '齊'), ('齿', '齒'),
    ('龄', '齡'), ('龟', '龜'), ('爱', '愛'), ('国', '國'), ('园', '園'),
    ('圆', '圓'), ('图', '圖'), ('团', '團'), ('围', '圍'), ('汉', '漢'),
    ('汤', '湯'), ('沟', '溝'), ('没', '沒'), ('泪', '淚'), ('泽', '澤'),
    ('洁', '潔'), ('浅', '淺'), ('济', '濟'), ('浊', '濁'), ('测', '測'),
    ('浏', '瀏'), ('涛', '濤'), ('润', '潤'), ('涨', '漲'), ('渊', '淵'),
    ('渐', '漸'), ('湾', '灣'), ('满', '滿'), ('滚', '滾'), ('滨', '濱'),
    ('潜', '潛'), ('灯', '燈'), ('灵', '靈'), ('炼', '煉'), ('烂', '爛'),
    ('烦', '煩'), ('热', '熱'), ('烧', '燒'), ('烛', '燭'), ('无', '無'),
    ('爷', '爺'), ('状', '狀'), ('独', '獨'), ('狱', '獄'), ('猫', '貓'),
    ('献', '獻'), ('环', '環'), ('现', '現'), ('玛', '瑪'), ('琼', '瓊'),
    ('画', '畫'), ('畅', '暢'), ('疗', '療'), ('疮', '瘡'), ('痒', '癢'),
    ('县', '縣'), ('盘', '盤'), ('监', '監'), ('盖', '蓋'), ('盗', '盜'),
    ('矿', '礦'), ('码', '碼'), ('砖', '磚'), ('础', '礎'), ('确', '確'),
    ('碍', '礙'), ('礼', '禮'), ('祸', '禍'), ('禅', '禪'), ('种', '種'),
    ('称', '稱'), ('积', '積'), ('稳', '穩'), ('穷', '窮'), ('窃', '竊'),
    ('竞', '競'), ('笔', '筆'), ('笼', '籠'), ('筛', '篩'), ('简', '簡'),
    ('签', '簽'), ('筹', '籌'), ('类', '類'), ('粮', '糧'), ('纠', '糾'),
    ('红', '紅'), ('约', '約'), ('级', '級'), ('纪', '紀'), ('纯', '純'),
    ('纲', '綱'), ('纳', '納'), ('纵', '縱'), ('纷', '紛'), ('纸', '紙'),
    ('纹', '紋'), ('纺', '紡'), ('线', '線'), ('练', '練'), ('组', '組'),
    ('绍', '紹'), ('细', '細'), ('织', '織'), ('终', '終'), ('绝', '絕'),
    ('统', '統'), ('绢', '絹'), ('绣', '繡'), ('绩', '績'), ('绪', '緒'),
    ('续', '續'), ('继', '繼'), ('维', '維'), ('绵', '綿'), ('绿', '綠'),
    ('缆', '纜'), ('缓', '緩'), ('编', '編'), ('缘', '緣'), ('缚', '縛'),
    ('缝', '縫'), ('缩', '縮'), ('罗', '羅'), ('罚', '罰'), ('罢', '罷'),
    ('义', '義'), ('职', '職'), ('联', '聯'), ('聪', '聰'), ('声', '聲'),
    ('肠', '腸'), ('肤', '膚'), ('肾', '腎'), ('胀', '脹'), ('胜', '勝'),
    ('脑', '腦'), ('舰', '艦'), ('舱', '艙'), ('艺', '藝'), ('节', '節'),
    ('芦', '蘆'), ('苏', '蘇'), ('苹', '蘋'), ('范', '範'), ('茎', '莖'),
    ('荐', '薦'), ('荣', '榮'), ('药', '藥'), ('莱', '萊'), ('萝', '蘿'),
    ('营', '營'), ('萧', '蕭'), ('蓝', '藍'), ('蕴', '蘊'), ('虽', '雖'),
    ('虫', '蟲'), ('蚁', '蟻'), ('蚕', '蠶'), ('蛮', '蠻'), ('观', '觀'),
    ('规', '規'), ('视', '視'), ('觉', '覺'), ('览', '覽'), ('触', '觸'),
    ('订', '訂'), ('计', '計'), ('认', '認'), ('讨', '討'), ('训', '訓'),
    ('议', '議'), ('讯', '訊'), ('记', '記'), ('讲', '講'), ('许', '許'),
    ('论', '論'), ('讽', '諷'), ('设', '設'), ('访', '訪'), ('诀', '訣'),
    ('证', '證'), ('评', '評'), ('识', '識'), ('诉', '訴'), ('词', '詞'),
    ('译', '譯'), ('试', '試'), ('诗', '詩'), ('诚', '誠'), ('诞', '誕'),
    ('询', '詢'), ('该', '該'), ('详', '詳'), ('误', '誤'), ('请', '請'),
    ('诸', '諸'), ('课', '課'), ('谁', '誰'), ('调', '調'), ('谈', '談'),
    ('谊', '誼'), ('谋', '謀'), ('谐', '諧'), ('谜', '謎'), ('谢', '謝'),
    ('谣', '謠'), ('谦', '謙'), ('谨', '謹'), ('谱', '譜'), ('贝', '貝'),
    ('贞', '貞'), ('负', '負'), ('贡', '貢'), ('财', '財'), ('责', '責'),
    ('贤', '賢'), ('败', '敗'), ('货', '貨'), ('质', '質'), ('贩', '販'),
    ('贪', '貪'), ('贫', '貧'), ('购', '購'), ('贯', '貫'), ('贵', '貴'),
    ('贷', '貸'), ('贸', '貿'), ('费', '費'), ('贺', '賀'), ('资', '資'),
    ('赏', '賞'), ('赐', '賜'), ('赔', '賠'), ('赖', '賴'), ('赚', '賺'),
    ('赛', '賽'), ('赞', '贊'), ('赠', '贈'), ('赶', '趕'), ('趋', '趨'),
    ('跃', '躍'), ('践', '踐'), ('轨', '軌'), ('军', '軍'), ('辞', '辭'),
    ('辩', '辯'), ('辫', '辮'), ('亿', '億'), ('仅', '僅'), ('从', '從'),
    ('仓', '倉'), ('价', '價'), ('众', '眾'), ('优', '優'), ('伟', '偉'),
    ('伤', '傷'), ('伦', '倫'), ('俭', '儉'), ('债', '債'), ('倾', '傾'),
    ('偿', '償'), ('储', '儲'), ('儿', '兒'), ('兑', '兌'), ('兰', '蘭'),
    ('兴', '興'), ('养', '養'), ('兽', '獸'), ('内', '內'), ('冈', '岡'),
    ('册', '冊'), ('农', '農'), ('冯', '馮'), ('决', '決'), ('况', '況'),
    ('冻', '凍'), ('净', '淨'), ('减', '減'), ('凑', '湊'), ('凤', '鳳'),
    ('凭', '憑'), ('凯', '凱'), ('击', '擊'), ('刘', '劉'), ('则', '則'),
    ('刚', '剛'), ('创', '創'), ('删', '刪'), ('别', '別'), ('剂', '劑'),
    ('剑', '劍'), ('剧', '劇'), ('劝', '勸'), ('办', '辦'), ('务', '務'),
    ('动', '動'), ('励', '勵'), ('劲', '勁'), ('势', '勢'), ('华', '華'),
    ('协', '協'), ('单', '單'), ('卖', '賣'), ('卫', '衛'), ('厂', '廠'),
    ('厅', '廳'), ('历', '歷'), ('厉', '厲'), ('压', '壓'), ('厌', '厭'),
    ('参', '參'), ('双', '雙'), ('变', '變'), ('叙', '敘'), ('发', '發'),
    ('号', '號'), ('叹', '嘆'), ('吓', '嚇'), ('吕', '呂'), ('吗', '嗎'),
    ('吨', '噸'), ('听', '聽'), ('启', '啟'), ('吴', '吳'), ('员', '員'),
    ('响', '響'), ('哑', '啞'), ('唤', '喚'), ('喷', '噴'), ('嘱', '囑'),
    ('圣', '聖'), ('场', '場'), ('坏', '壞'), ('块', '塊'), ('坚', '堅'),
    ('坛', '壇'), ('坟', '墳'), ('坠', '墜'), ('垫', '墊'), ('墙', '牆'),
    ('壮', '壯'), ('处', '處'), ('备', '備'), ('够', '夠'), ('头', '頭'),
    ('夹', '夾'), ('夺', '奪'), ('奋', '奮'), ('奖', '獎'), ('妇', '婦'),
    ('妈', '媽'), ('娇', '嬌'), ('婴', '嬰'), ('孙', '孫'), ('宁', '寧'),
    ('宝', '寶'), ('实', '實'), ('宠', '寵'), ('审', '審'), ('宪', '憲'),
    ('宫', '宮'), ('宽', '寬'), ('宾', '賓'), ('寝', '寢'), ('寿', '壽'),
    ('将', '將'), ('尔', '爾'), ('尘', '塵'), ('尝', '嘗'), ('层', '層'),
    ('届', '屆'), ('属', '屬'), ('岁', '歲'), ('岂', '豈'), ('峡', '峽'),
    ('岛', '島'), ('岭', '嶺'), ('帅', '帥'), ('师', '師'), ('帐', '帳'),
    ('带', '帶'), ('帮', '幫'), ('币', '幣'), ('广', '廣'), ('庄', '莊'),
    ('庆', '慶'), ('库', '庫'), ('应', '應'), ('庙', '廟'), ('废', '廢'),
    ('异', '異'), ('弃', '棄'), ('张', '張'), ('弥', '彌'), ('弯', '彎'),
    ('弹', '彈'), ('强', '強'), ('归', '歸'), ('当', '當'), ('彻', '徹'),
    ('径', '徑'), ('忆', '憶'), ('忧', '憂'), ('怀', '懷'), ('态', '態'),
    ('怜', '憐'), ('总', '總'), ('恋', '戀'), ('恶', '惡'), ('恼', '惱'),
    ('悬', '懸'), ('惊', '驚'), ('惧', '懼'), ('惨', '慘'), ('惯', '慣'),
    ('愿', '願'), ('懒', '懶'), ('戏', '戲'), ('战', '戰'), ('户', '戶'),
    ('扑', '撲'), ('执', '執'), ('扩', '擴'), ('扫', '掃'), ('扬', '揚'),
    ('抚', '撫'), ('抛', '拋'), ('抢', '搶'), ('护', '護'), ('报', '報'),
    ('担', '擔'), ('拟', '擬'), ('拣', '揀'), ('拥', '擁'), ('择', '擇'),
    ('挂', '掛'), ('挚', '摯'), ('挣', '掙'), ('挤', '擠'), ('挥', '揮'),
    ('捞', '撈'), ('损', '損'), ('捡', '撿'), ('换', '換'), ('据', '據'),
    ('摆', '擺'), ('摄', '攝'), ('摊', '攤'), ('撑', '撐'), ('斋', '齋'),
    ('旧', '舊'), ('旷', '曠'), ('昼', '晝'), ('显', '顯'), ('晋', '晉'),
    ('晒', '曬'), ('晓', '曉'), ('晕', '暈'), ('暂', '暫'), ('术', '術'),
    ('朴', '樸'), ('机', '機'), ('杀', '殺'), ('杂', '雜'), ('权', '權'),
    ('条', '條'), ('杨', '楊'), ('极', '極'), ('构', '構'), ('枪', '槍'),
    ('柜', '櫃'), ('标', '標'), ('栋', '棟'), ('栏', '欄'), ('树', '樹'),
    ('样', '樣'), ('档', '檔'), ('桥', '橋'), ('桨', '槳'), ('梦', '夢'),
    ('检', '檢'), ('楼', '樓'), ('榄', '欖'), ('横', '橫'), ('樱', '櫻'),
    ('欢', '歡'), ('欧', '歐'), ('歼', '殲'), ('残', '殘'), ('殴', '毆'),
    ('毁', '毀'), ('毕', '畢'), ('毙', '斃'), ('气', '氣'), ('氢', '氫'),
    ('汇', '匯'), ('泞', '濘'), ('泻', '瀉'), ('泼', '潑'), ('洒', '灑'),
    ('浆', '漿'), ('浇', '澆'), ('浑', '渾'), ('浓', '濃'), ('涂', '塗'),
    ('涝', '澇'), ('涩', '澀'), ('渔', '漁'), ('温', '溫'), ('湿', '濕'),
    ('溃', '潰'), ('滥', '濫'), ('滞', '滯'), ('滤', '濾'), ('潇', '瀟'),
    ('澜', '瀾'), ('濒', '瀕'), ('灭', '滅'), ('点', '點'), ('烁', '爍'),
    ('烫', '燙'), ('焕', '煥'), ('牵', '牽'), ('牺', '犧'), ('犹', '猶'),
    ('狈', '狽'), ('狭', '狹'), ('狮', '獅'), ('猎', '獵'), ('灾', '災'),
    ('灿', '燦'), ('炉', '爐'), ('烟', '煙'), ('皱', '皺'), ('盏', '盞'),
    ('盐', '鹽'), ('卢', '盧'), ('睁', '睜'), ('矫', '矯'), ('硕', '碩'),
    ('离', '離'), ('秃', '禿'), ('稣', '穌'), ('窍', '竅'), ('窑', '窯'),
    ('窜', '竄'), ('窝', '窩'), ('竖', '豎'), ('笃', '篤'), ('笋', '筍'),
    ('筑', '築'), ('筝', '箏'), ('箫', '簫'), ('篮', '籃'), ('粤', '粵'),
    ('粪', '糞'), ('紧', '緊'), ('罂', '罌'), ('羁', '羈'), ('翘', '翹'),
    ('耸', '聳'), ('聋', '聾'), ('肃', '肅'), ('肿', '腫'), ('胆', '膽'),
    ('脉', '脈'), ('脐', '臍'), ('脓', '膿'), ('脸', '臉'), ('腻', '膩'),
    ('腾', '騰'), ('舆', '輿'), ('艰', '艱'), ('苇', '葦'), ('苍', '蒼'),
    ('茧', '繭'), ('荚', '莢'), ('荡', '蕩'), ('荤', '葷'), ('莲', '蓮'),
    ('获', '獲'), ('萤', '螢'), ('蓟', '薊'), ('蔷', '薔'), ('虏', '虜'),
    ('虑', '慮'), ('虚', '虛'), ('虾', '蝦'), ('蚀', '蝕'), ('蚂', '螞'),
    ('蛊', '蠱'), ('蜗', '蝸'), ('蝇', '蠅'), ('蝉', '蟬'), ('衅', '釁'),
    ('衔', '銜'), ('补', '補'), ('衬', '襯'), ('袄', '襖'), ('装', '裝'),
    ('裤', '褲'), ('誉', '譽'), ('誊', '謄'), ('赵', '趙'), ('踌', '躊'),
    ('蹑', '躡'), ('轧', '軋'), ('轩', '軒'), ('轰', '轟'), ('轴', '軸'),
    ('轿', '轎'), ('辈', '輩'), ('辉', '輝'), ('辐', '輻'), ('辑', '輯'),
    ('输', '輸'), ('辖', '轄'), ('辗', '輾'), ('辙', '轍'), ('辽', '遼'),
    ('迈', '邁'), ('违', '違'), ('连', '連'), ('迟', '遲'), ('逊', '遜'),
    ('邓', '鄧'), ('邮', '郵'), ('邹', '鄒'), ('郑', '鄭'), ('酝', '醞'),
    ('酿', '釀'), ('钉', '釘'), ('钓', '釣'), ('钙', '鈣'), ('钝', '鈍'),
    ('钞', '鈔'), ('钟', '鐘'), ('钠', '鈉'), ('钥', '鑰'), ('钦', '欽'),
    ('钧', '鈞'), ('钩', '鉤'), ('钮', '鈕'), ('钻', '鑽'), ('铅', '鉛'),
    ('铝', '鋁'), ('铭', '銘'), ('铲', '鏟'), ('铸', '鑄'), ('铺', '鋪'),
    ('锄', '鋤'), ('锅', '鍋'), ('锐', '銳'), ('锚', '錨'), ('锡', '錫'),
    ('锣', '鑼'), ('锤', '錘'), ('锦', '錦'), ('锯', '鋸'), ('镶', '鑲'),
    ('闩', '閂'), ('闯', '闖'), ('闰', '閏'), ('闷', '悶'), ('闸', '閘'),
    ('闹', '鬧'), ('闺', '閨'), ('阁', '閣'), ('阐', '闡'), ('阔', '闊'),
    ('阵', '陣'), ('险', '險'), ('随', '隨'), ('隶', '隸'), ('雳', '靂'),
    ('静', '靜'), ('韧', '韌'), ('韩', '韓'), ('顷', '頃'), ('项', '項'),
    ('顽', '頑'), ('颅', '顱'), ('颈', '頸'), ('颖', '穎'), ('颗', '顆'),
    ('颠', '顛'), ('颤', '顫'), ('飘', '飄'), ('饥', '飢'), ('饰', '飾'),
    ('饲', '飼'), ('饵', '餌'), ('饶', '饒'), ('饼', '餅'), ('馅', '餡'),
    ('驭', '馭'), ('驮', '馱'), ('驰', '馳'), ('驳', '駁'), ('驴', '驢'),
    ('驹', '駒'), ('驼', '駝'), ('骂', '罵'), ('骄', '驕'), ('骆', '駱'),
    ('骇', '駭'), ('骋', '騁'), ('骏', '駿'), ('骚', '騷'), ('骤', '驟'),
    ('鲍', '鮑'), ('鲤', '鯉'), ('鲸', '鯨'), ('鳄', '鱷'), ('鸥', '鷗'),
    ('鸦', '鴉'), ('鸽', '鴿'), ('鹃', '鵑'), ('鹊', '鵲'), ('鹰', '鷹'),
    ('龚', '龔'), ('与', '與'),
];

/// Simplified → traditional conversion oracle
///
/// Built once per run from the embedded table and shared by reference
/// across all concurrent line tasks (the table is read-only, so the
/// oracle is `Sync`).
#[derive(Debug)]
pub struct Converter {
    table: HashMap<char, char>,
}

impl Converter {
    /// Build the simplified-to-traditional converter from the embedded table
    pub fn s2t() -> Self {
        Self {
            table: S2T_PAIRS.iter().copied().collect(),
        }
    }

    /// Convert a single character, returning it unchanged if it has no
    /// traditional form in the table
    pub fn convert_char(&self, c: char) -> char {
        self.table.get(&c).copied().unwrap_or(c)
    }

    /// Convert a whole string character by character
    pub fn convert(&self, text: &str) -> String {
        text.chars().map(|c| self.convert_char(c)).collect()
    }

    /// Check whether a character would change under conversion
    pub fn needs_conversion(&self, c: char) -> bool {
        self.convert_char(c) != c
    }
}

/// Check whether text contains any CJK ideograph (U+4E00..=U+9FA5)
///
/// Cheap pre-filter: files without any ideograph skip the line scan
/// entirely.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_char_simplified() {
        let cc = Converter::s2t();
        assert_eq!(cc.convert_char('这'), '這');
        assert_eq!(cc.convert_char('测'), '測');
        assert_eq!(cc.convert_char('试'), '試');
    }

    #[test]
    fn test_convert_char_identity() {
        let cc = Converter::s2t();
        // Non-Chinese input maps to itself
        assert_eq!(cc.convert_char('a'), 'a');
        assert_eq!(cc.convert_char('!'), '!');
        // Already-traditional input maps to itself
        assert_eq!(cc.convert_char('這'), '這');
        assert_eq!(cc.convert_char('測'), '測');
    }

    #[test]
    fn test_convert_string() {
        let cc = Converter::s2t();
        assert_eq!(cc.convert("测试"), "測試");
        assert_eq!(cc.convert("hello 测试 world"), "hello 測試 world");
        assert_eq!(cc.convert(""), "");
    }

    #[test]
    fn test_needs_conversion() {
        let cc = Converter::s2t();
        assert!(cc.needs_conversion('这'));
        assert!(!cc.needs_conversion('這'));
        assert!(!cc.needs_conversion('x'));
    }

    #[test]
    fn test_conversion_is_idempotent() {
        // No traditional form may appear as a table key, otherwise a
        // second scan of a converted file would report findings again.
        let cc = Converter::s2t();
        for &(simplified, traditional) in S2T_PAIRS {
            assert_eq!(
                cc.convert_char(traditional),
                traditional,
                "{traditional} (traditional form of {simplified}) must not be a table key"
            );
        }
    }

    #[test]
    fn test_table_has_no_duplicate_keys() {
        let cc = Converter::s2t();
        assert_eq!(cc.table.len(), S2T_PAIRS.len());
    }

    #[test]
    fn test_contains_cjk() {
        assert!(contains_cjk("测试"));
        assert!(contains_cjk("already 繁體 here"));
        assert!(!contains_cjk("plain ascii"));
        assert!(!contains_cjk(""));
        // Kana is outside the ideograph range
        assert!(!contains_cjk("ひらがな"));
    }
}
