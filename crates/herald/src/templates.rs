//! Built-in email markup skeletons.
//!
//! Both built-in themes share these minijinja sources; the flat look is
//! entirely stylesheet-driven. The HTML template is registered under an
//! `.html` name so auto-escaping applies — values documented as raw HTML
//! (markdown output, unsafe fields, the serialized stylesheet) are marked
//! `| safe` explicitly. Custom themes supply their own sources through the
//! [`Theme`](crate::Theme) trait.

/// The HTML email skeleton shared by the built-in themes.
pub(crate) const DEFAULT_HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html dir="{{ text_direction }}" xmlns="http://www.w3.org/1999/xhtml">
  <head>
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    <style type="text/css" rel="stylesheet" media="all">
{{ stylesheet | safe }}
{{ breakpoint | safe }}
    </style>
  </head>
  <body dir="{{ text_direction }}">
    <table class="email-wrapper" width="100%" cellpadding="0" cellspacing="0">
      <tr>
        <td align="center">
          <table class="email-content" width="100%" cellpadding="0" cellspacing="0">
            <tr>
              <td class="email-masthead">
                {% if product.logo %}
                <a href="{{ product.link }}" target="_blank">
                  <img src="{{ product.logo }}" class="email-logo" alt="{{ product.name }}" />
                </a>
                {% else %}
                <a href="{{ product.link }}" class="email-masthead_name" target="_blank">{{ product.name }}</a>
                {% endif %}
              </td>
            </tr>
            <tr>
              <td class="email-body" width="100%">
                <table class="email-body_inner" align="center" width="570" cellpadding="0" cellspacing="0">
                  <tr>
                    <td class="content-cell">
                      <h1>{% if body.title %}{{ body.title }}{% else %}{{ body.greeting }} {{ body.name }},{% endif %}</h1>
                      {% if body.intros_markdown %}
                      {{ body.intros_markdown | markdown | safe }}
                      {% elif body.intros_unsafe %}
                      {% for intro in body.intros_unsafe %}
                      <p>{{ intro | safe }}</p>
                      {% endfor %}
                      {% else %}
                      {% for intro in body.intros %}
                      <p>{{ intro }}</p>
                      {% endfor %}
                      {% endif %}
                      {% if body.free_markdown %}
                      {{ body.free_markdown | markdown | safe }}
                      {% else %}
                      {% if body.dictionary %}
                      <dl class="body-dictionary">
                        {% for entry in body.dictionary %}
                        <dt>{{ entry.key }}:</dt>
                        <dd>{% if entry.value %}{{ entry.value }}{% else %}{{ entry.unsafe_value | safe }}{% endif %}</dd>
                        {% endfor %}
                      </dl>
                      {% endif %}
                      {% for table in body.tables %}
                      {% if table.data %}
                      <table class="data-wrapper" width="100%" cellpadding="0" cellspacing="0">
                        <tr>
                          <td colspan="2">
                            <table class="data-table" width="100%" cellpadding="0" cellspacing="0">
                              {% if table.title_unsafe %}
                              <caption>{{ table.title_unsafe | safe }}</caption>
                              {% elif table.title %}
                              <caption>{{ table.title }}</caption>
                              {% endif %}
                              <tr>
                                {% for entry in table.data[0] %}
                                <th{% if table.columns.custom_width[entry.key] %} width="{{ table.columns.custom_width[entry.key] }}"{% endif %}{% if table.columns.custom_alignment[entry.key] %} style="text-align: {{ table.columns.custom_alignment[entry.key] }}"{% endif %}>
                                  <p>{{ entry.key }}</p>
                                </th>
                                {% endfor %}
                              </tr>
                              {% for row in table.data %}
                              <tr>
                                {% for entry in row %}
                                <td{% if table.columns.custom_alignment[entry.key] %} style="text-align: {{ table.columns.custom_alignment[entry.key] }}"{% endif %}>
                                  {% if entry.value %}{{ entry.value }}{% else %}{{ entry.unsafe_value | safe }}{% endif %}
                                </td>
                                {% endfor %}
                              </tr>
                              {% endfor %}
                              {% if table.footer_unsafe or table.footer %}
                              <tr>
                                <td colspan="{{ table.data[0] | length }}" class="align-right">
                                  {% if table.footer_unsafe %}{{ table.footer_unsafe | safe }}{% else %}{{ table.footer }}{% endif %}
                                </td>
                              </tr>
                              {% endif %}
                            </table>
                          </td>
                        </tr>
                      </table>
                      {% endif %}
                      {% endfor %}
                      {% for action in body.actions %}
                      <table class="body-action" align="center" width="100%" cellpadding="0" cellspacing="0">
                        <tr>
                          <td align="center">
                            <p>{{ action.instructions }}</p>
                            {% if action.invite_code %}
                            <div class="invite-code-container">
                              <table class="invite-code-table" align="center" cellpadding="0" cellspacing="0">
                                <tr>
                                  <td class="invite-code-cell">{{ action.invite_code }}</td>
                                </tr>
                              </table>
                            </div>
                            {% elif action.button.text %}
                            <a href="{{ action.button.link }}" class="button" style="{% if action.button.color %}background-color: {{ action.button.color }};{% endif %}{% if action.button.text_color %} color: {{ action.button.text_color }};{% endif %}" target="_blank">{{ action.button.text }}</a>
                            {% endif %}
                          </td>
                        </tr>
                      </table>
                      {% endfor %}
                      {% endif %}
                      {% if body.outros_markdown %}
                      {{ body.outros_markdown | markdown | safe }}
                      {% elif body.outros_unsafe %}
                      {% for outro in body.outros_unsafe %}
                      <p>{{ outro | safe }}</p>
                      {% endfor %}
                      {% else %}
                      {% for outro in body.outros %}
                      <p>{{ outro }}</p>
                      {% endfor %}
                      {% endif %}
                      <p>{{ body.signature }},<br />{{ product.name }}</p>
                      {% if body.actions and not body.free_markdown %}
                      <table class="body-sub">
                        {% for action in body.actions %}
                        {% if not action.invite_code and action.button.link %}
                        <tr>
                          <td>
                            <p class="sub">{{ product.trouble_text | replace("{ACTION}", action.button.text) }}</p>
                            <p class="sub"><a href="{{ action.button.link }}">{{ action.button.link }}</a></p>
                          </td>
                        </tr>
                        {% endif %}
                        {% endfor %}
                      </table>
                      {% endif %}
                    </td>
                  </tr>
                </table>
              </td>
            </tr>
            <tr>
              <td>
                <table class="email-footer" align="center" width="570" cellpadding="0" cellspacing="0">
                  <tr>
                    <td class="content-cell" align="center">
                      <p class="sub align-center">{{ product.copyright }}</p>
                    </td>
                  </tr>
                </table>
              </td>
            </tr>
          </table>
        </td>
      </tr>
    </table>
  </body>
</html>
"#;

/// The plain-text email skeleton shared by the built-in themes.
///
/// Data tables arrive pre-rendered in `plain_tables`, one bordered text grid
/// per table, in document order.
pub(crate) const DEFAULT_PLAIN_TEMPLATE: &str = r#"{{ product.name }} - {{ product.link }}

{% if body.title -%}
{{ body.title }}
{%- else -%}
{{ body.greeting }} {{ body.name }},
{%- endif %}

{% if body.intros_markdown -%}
{{ body.intros_markdown }}
{% elif body.intros_unsafe -%}
{% for intro in body.intros_unsafe %}{{ intro }}
{% endfor %}
{%- else -%}
{% for intro in body.intros %}{{ intro }}
{% endfor %}
{%- endif %}
{% if body.free_markdown -%}
{{ body.free_markdown }}
{% else -%}
{% for entry in body.dictionary %}{{ entry.key }}: {% if entry.value %}{{ entry.value }}{% else %}{{ entry.unsafe_value }}{% endif %}
{% endfor %}
{%- for table in plain_tables %}
{{ table }}
{%- endfor %}
{% for action in body.actions %}{{ action.instructions }}

{% if action.invite_code %}{{ action.invite_code }}{% else %}{{ action.button.link }}{% endif %}

{% endfor %}
{%- endif %}
{% if body.outros_markdown -%}
{{ body.outros_markdown }}
{% elif body.outros_unsafe -%}
{% for outro in body.outros_unsafe %}{{ outro }}
{% endfor %}
{%- else -%}
{% for outro in body.outros %}{{ outro }}
{% endfor %}
{%- endif %}
{{ body.signature }},
{{ product.name }}

{{ product.copyright }}
"#;
