use bento_core::ModelRequest;
use crate::normalize::truncate_content;

/// Instructions asking for the bento JSON object and nothing else.
pub const SYSTEM_PROMPT: &str = r#"你是顶级产品发布页内容策划师。请根据原文，策划一个现代高端Bento Grid风格的发布页内容，要求如下：

- title：极具冲击力、营销感，10-16字
- subtitle：一句话总结产品/服务最大亮点
- coreNumbers：1-3个大数字（如"36T数据""119种语言"），每个配简短说明
- sections：每区3-5条关键信息，内容精炼有力，禁止长段落/代码/无关内容
- tags：3-8个关键词，适合胶囊标签展示
- cta：一句话引导用户体验/关注
- 只返回如下JSON，不要多余解释：
{
  "title": "",
  "subtitle": "",
  "coreNumbers": [{"number": "", "desc": ""}],
  "sections": [{"title": "", "items": [{"label": "", "value": ""}]}],
  "tags": [],
  "cta": ""
}"#;

/// Builds the request for one article, cutting the text to the model's budget.
pub fn build_request(content: &str) -> ModelRequest {
    ModelRequest::new(SYSTEM_PROMPT, truncate_content(content))
}
